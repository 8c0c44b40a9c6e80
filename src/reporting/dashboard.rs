use crate::analysis::DashboardSummary;
use crate::core::constants::display;
use crate::core::types::Table;
use crate::ui::output::format_count;
use std::fs;
use std::io;

/// Constants for dashboard styling and layout
mod dashboard_constants {
    /// Chart.js CDN URL for rendering charts
    pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

    /// Dashboard tabs as (element id, label)
    pub const TABS: [(&str, &str); 4] = [
        ("tab-overview", "📈 Overview"),
        ("tab-demographics", "🎯 Demographics"),
        ("tab-universities", "🏫 Universities"),
        ("tab-geographic", "📍 Geographic"),
    ];
}

/// Data structure containing all information needed for dashboard generation
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Metrics and chart data computed from the cleaned table
    pub summary: DashboardSummary,
    /// The cleaned table, rendered in full at the bottom of the page
    pub table: Table,
    /// Name of the input file
    pub source: String,
    /// Timestamp when the dashboard was generated
    pub timestamp: String,
}

/// Error type for dashboard generation
#[derive(Debug)]
pub enum DashboardError {
    FileWrite(io::Error),
    Serialization(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::FileWrite(e) => write!(f, "Failed to write dashboard file: {e}"),
            DashboardError::Serialization(e) => write!(f, "Failed to serialize data: {e}"),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::FileWrite(e) => Some(e),
            DashboardError::Serialization(_) => None,
        }
    }
}

impl From<io::Error> for DashboardError {
    fn from(e: io::Error) -> Self {
        DashboardError::FileWrite(e)
    }
}

/// HTML dashboard generator for graduate records
pub struct HtmlDashboard;

impl HtmlDashboard {
    /// Generate and write an HTML dashboard to the specified path
    pub fn generate_dashboard(
        data: &DashboardData,
        output_path: &str,
    ) -> Result<(), DashboardError> {
        let html_content = Self::generate_html_content(data)?;
        fs::write(output_path, html_content)?;
        Ok(())
    }

    /// Generate the complete HTML document content
    fn generate_html_content(data: &DashboardData) -> Result<String, DashboardError> {
        let css_styles = Self::generate_css();
        let js_scripts = Self::generate_javascript();
        let body_content = Self::generate_body_content(data)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Graduate Data Analytics Dashboard - gradboard</title>
    <script src="{}"></script>
    <style>{}</style>
</head>
<body>
    {}
    <script>{}</script>
</body>
</html>"#,
            dashboard_constants::CHART_JS_CDN,
            css_styles,
            body_content,
            js_scripts
        ))
    }

    fn generate_css() -> &'static str {
        r#"
        :root {
            --primary-color: #2563eb;
            --bg-color: #f8fafc;
            --card-bg: #ffffff;
            --border-color: #e2e8f0;
            --text-primary: #1e293b;
            --text-secondary: #64748b;
        }

        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-primary);
            line-height: 1.6;
        }

        .container {
            max-width: 1400px;
            margin: 0 auto;
            padding: 2rem;
        }

        .header {
            text-align: center;
            margin-bottom: 2rem;
            padding: 2rem;
            background: linear-gradient(135deg, var(--primary-color), #3b82f6);
            color: white;
            border-radius: 12px;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
        }

        .header h1 {
            font-size: 2.5rem;
            margin-bottom: 0.5rem;
            font-weight: 700;
        }

        .header p { font-size: 1.1rem; opacity: 0.9; }

        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 1.5rem;
            margin-bottom: 2rem;
        }

        .stat-card {
            background: var(--card-bg);
            padding: 1.5rem;
            border-radius: 12px;
            border: 1px solid var(--border-color);
            box-shadow: 0 2px 4px -1px rgba(0, 0, 0, 0.06);
        }

        .stat-icon {
            width: 48px;
            height: 48px;
            border-radius: 12px;
            display: flex;
            align-items: center;
            justify-content: center;
            margin-bottom: 1rem;
            font-size: 1.5rem;
            background-color: #eff6ff;
        }

        .stat-value { font-size: 2rem; font-weight: 700; margin-bottom: 0.5rem; }

        .stat-label {
            color: var(--text-secondary);
            font-size: 0.9rem;
            text-transform: uppercase;
            letter-spacing: 0.5px;
        }

        .tabs {
            display: flex;
            gap: 0.5rem;
            margin-bottom: 1.5rem;
            border-bottom: 1px solid var(--border-color);
        }

        .tab-button {
            background: none;
            border: none;
            padding: 0.75rem 1.25rem;
            font-size: 1rem;
            cursor: pointer;
            color: var(--text-secondary);
            border-bottom: 3px solid transparent;
        }

        .tab-button.active {
            color: var(--primary-color);
            border-bottom-color: var(--primary-color);
            font-weight: 600;
        }

        .tab-panel { display: none; }
        .tab-panel.active { display: block; }

        .chart-row {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(450px, 1fr));
            gap: 1.5rem;
        }

        .chart-container {
            background: var(--card-bg);
            padding: 2rem;
            border-radius: 12px;
            border: 1px solid var(--border-color);
            margin-bottom: 2rem;
            box-shadow: 0 2px 4px -1px rgba(0, 0, 0, 0.06);
        }

        .chart-title {
            font-size: 1.25rem;
            font-weight: 600;
            margin-bottom: 1rem;
        }

        .table-section {
            background: var(--card-bg);
            border-radius: 12px;
            border: 1px solid var(--border-color);
            overflow: hidden;
        }

        .section-header {
            background: var(--bg-color);
            padding: 1.5rem;
            border-bottom: 1px solid var(--border-color);
        }

        .section-title { font-size: 1.25rem; font-weight: 600; }

        .table-scroll { max-height: 400px; overflow: auto; }

        table { border-collapse: collapse; width: 100%; font-size: 0.875rem; }

        th, td {
            padding: 0.5rem 1rem;
            border-bottom: 1px solid var(--border-color);
            text-align: left;
            white-space: nowrap;
        }

        th { position: sticky; top: 0; background: var(--bg-color); }

        .empty-note { padding: 2rem; text-align: center; color: var(--text-secondary); }

        @media (max-width: 768px) {
            .container { padding: 1rem; }
            .header h1 { font-size: 2rem; }
            .chart-row { grid-template-columns: 1fr; }
            .chart-container { padding: 1rem; }
        }
        "#
    }

    /// Generate the main body content of the dashboard
    fn generate_body_content(data: &DashboardData) -> Result<String, DashboardError> {
        let header_section = Self::generate_header_section(&data.source, &data.timestamp);
        let stats_section = Self::generate_stats_section(data);
        let charts_section = Self::generate_charts_section(data)?;
        let table_section = Self::generate_table_section(&data.table);

        Ok(format!(
            r#"
            <div class="container">
                {header_section}
                {stats_section}
                {charts_section}
                {table_section}
            </div>
            "#
        ))
    }

    /// Generate the dashboard header section
    fn generate_header_section(source: &str, timestamp: &str) -> String {
        format!(
            r#"
            <div class="header">
                <h1>{} Graduate Data Analytics Dashboard</h1>
                <p>{} generated on {} by gradboard</p>
            </div>
            "#,
            display::GRADUATES_EMOJI,
            escape_html(source),
            escape_html(timestamp)
        )
    }

    /// Generate the key metric cards
    fn generate_stats_section(data: &DashboardData) -> String {
        let metrics = &data.summary.metrics;

        format!(
            r#"
            <div class="stats-grid">
                {}
                {}
                {}
                {}
                {}
            </div>
            "#,
            Self::generate_stat_card(
                display::GRADUATES_EMOJI,
                &format_count(metrics.total_graduates),
                "Total Graduates"
            ),
            Self::generate_stat_card(
                display::UNIVERSITY_EMOJI,
                &metrics.universities.to_string(),
                "Universities"
            ),
            Self::generate_stat_card(
                display::COUNTRY_EMOJI,
                &metrics.countries.to_string(),
                "Countries"
            ),
            Self::generate_stat_card(
                display::GENDER_EMOJI,
                &format!("{:.1}%", metrics.male_percentage),
                "Male %"
            ),
            Self::generate_stat_card(
                display::CALENDAR_EMOJI,
                &metrics.year_range.to_string(),
                "Year Range"
            ),
        )
    }

    /// Generate a single statistics card
    fn generate_stat_card(icon: &str, value: &str, label: &str) -> String {
        format!(
            r#"
            <div class="stat-card">
                <div class="stat-icon">{icon}</div>
                <div class="stat-value">{value}</div>
                <div class="stat-label">{label}</div>
            </div>
            "#
        )
    }

    /// Generate a chart card holding one canvas
    fn generate_chart_card(title: &str, canvas_id: &str) -> String {
        format!(
            r#"
            <div class="chart-container">
                <h3 class="chart-title">{title}</h3>
                <canvas id="{canvas_id}"></canvas>
            </div>
            "#
        )
    }

    /// Generate the tabbed chart section with the chart data embedded as JSON
    fn generate_charts_section(data: &DashboardData) -> Result<String, DashboardError> {
        let chart_data_json = serde_json::to_string(&data.summary.charts)
            .map_err(|e| DashboardError::Serialization(e.to_string()))?
            // `<` only occurs inside JSON strings
            .replace('<', "\\u003c");

        let tab_buttons = dashboard_constants::TABS
            .iter()
            .enumerate()
            .map(|(i, (id, label))| {
                let active = if i == 0 { " active" } else { "" };
                format!(r#"<button class="tab-button{active}" data-tab="{id}">{label}</button>"#)
            })
            .collect::<Vec<_>>()
            .join("");

        let overview = format!(
            r#"<div class="chart-row">{}{}</div>{}"#,
            Self::generate_chart_card("Graduation Trends Over Time", "graduationTrendChart"),
            Self::generate_chart_card("Gender Distribution", "genderChart"),
            Self::generate_chart_card("Gender Trends by Year", "genderByYearChart"),
        );
        let demographics = format!(
            r#"<div class="chart-row">{}{}</div>"#,
            Self::generate_chart_card("Gender by Zone", "genderByZoneChart"),
            Self::generate_chart_card("Country Distribution", "countryChart"),
        );
        let universities = format!(
            "{}{}",
            Self::generate_chart_card("Top Universities", "topUniversitiesChart"),
            Self::generate_chart_card("University Enrollment Trends", "universityTrendsChart"),
        );
        let geographic = format!(
            "{}{}",
            Self::generate_chart_card(
                &format!("Top {} Districts", data.summary.charts.top_districts.len()),
                "topDistrictsChart"
            ),
            Self::generate_chart_card("Zone Distribution Over Time", "zoneByYearChart"),
        );

        let [overview_id, demographics_id, universities_id, geographic_id] =
            dashboard_constants::TABS.map(|(id, _)| id);

        Ok(format!(
            r#"
            <div class="tabs">{tab_buttons}</div>
            <div class="tab-panel active" id="{overview_id}">{overview}</div>
            <div class="tab-panel" id="{demographics_id}">{demographics}</div>
            <div class="tab-panel" id="{universities_id}">{universities}</div>
            <div class="tab-panel" id="{geographic_id}">{geographic}</div>

            <script>
                const chartData = {chart_data_json};
                window.chartData = chartData;
            </script>
            "#
        ))
    }

    /// Generate the complete cleaned dataset as an HTML table
    fn generate_table_section(table: &Table) -> String {
        let body = if table.is_empty() {
            r#"<div class="empty-note"><p>No records in the input file.</p></div>"#.to_string()
        } else {
            let header = table
                .columns()
                .iter()
                .map(|column| format!("<th>{}</th>", escape_html(column)))
                .collect::<String>();

            let rows = table
                .rows()
                .iter()
                .map(|row| {
                    let cells = row
                        .iter()
                        .map(|cell| format!("<td>{}</td>", escape_html(cell)))
                        .collect::<String>();
                    format!("<tr>{cells}</tr>")
                })
                .collect::<Vec<_>>()
                .join("\n");

            format!(
                r#"<div class="table-scroll"><table><thead><tr>{header}</tr></thead><tbody>{rows}</tbody></table></div>"#
            )
        };

        format!(
            r#"
            <div class="table-section">
                <div class="section-header">
                    <h3 class="section-title">📋 Complete Dataset ({} rows)</h3>
                </div>
                {}
            </div>
            "#,
            format_count(table.len()),
            body
        )
    }

    fn generate_javascript() -> &'static str {
        r#"
        document.addEventListener('DOMContentLoaded', function() {
            document.querySelectorAll('.tab-button').forEach(function(button) {
                button.addEventListener('click', function() {
                    document.querySelectorAll('.tab-button').forEach(function(b) { b.classList.remove('active'); });
                    document.querySelectorAll('.tab-panel').forEach(function(p) { p.classList.remove('active'); });
                    button.classList.add('active');
                    document.getElementById(button.dataset.tab).classList.add('active');
                });
            });

            if (typeof Chart === 'undefined' || !window.chartData) {
                return;
            }

            const data = window.chartData;
            const palette = [
                '#ff6b6b', '#4ecdc4', '#95e1d3', '#2563eb', '#d97706',
                '#7c3aed', '#059669', '#db2777', '#64748b', '#0891b2'
            ];

            function labels(frequency) { return frequency.counts.map(function(c) { return c.value; }); }
            function values(frequency) { return frequency.counts.map(function(c) { return c.count; }); }

            function series(crosstab, extra) {
                return crosstab.column_keys.map(function(key, i) {
                    const color = palette[i % palette.length];
                    return Object.assign({
                        label: key,
                        data: crosstab.counts.map(function(row) { return row[i]; }),
                        backgroundColor: color,
                        borderColor: color
                    }, extra || {});
                });
            }

            function draw(id, config) {
                const ctx = document.getElementById(id);
                if (ctx) {
                    new Chart(ctx, config);
                }
            }

            function horizontal(id, frequency, label) {
                draw(id, {
                    type: 'bar',
                    data: {
                        labels: labels(frequency),
                        datasets: [{
                            label: label,
                            data: values(frequency),
                            backgroundColor: frequency.counts.map(function(_, i) { return palette[i % palette.length]; })
                        }]
                    },
                    options: { indexAxis: 'y', plugins: { legend: { display: false } } }
                });
            }

            draw('graduationTrendChart', {
                type: 'line',
                data: {
                    labels: labels(data.graduation_trend),
                    datasets: [{
                        label: 'Number of Graduates',
                        data: values(data.graduation_trend),
                        borderColor: '#1f77b4',
                        backgroundColor: 'rgba(31, 119, 180, 0.3)',
                        fill: true,
                        tension: 0.3
                    }]
                }
            });

            draw('genderChart', {
                type: 'pie',
                data: {
                    labels: labels(data.gender_distribution),
                    datasets: [{
                        data: values(data.gender_distribution),
                        backgroundColor: palette,
                        borderWidth: 2,
                        borderColor: '#ffffff'
                    }]
                },
                options: { plugins: { legend: { position: 'bottom' } } }
            });

            draw('genderByYearChart', {
                type: 'bar',
                data: { labels: data.gender_by_year.row_keys, datasets: series(data.gender_by_year) }
            });

            draw('genderByZoneChart', {
                type: 'bar',
                data: { labels: data.gender_by_zone.row_keys, datasets: series(data.gender_by_zone) },
                options: { indexAxis: 'y', scales: { x: { stacked: true }, y: { stacked: true } } }
            });

            horizontal('countryChart', data.country_distribution, 'Graduates');
            horizontal('topUniversitiesChart', data.top_universities, 'Number of Graduates');

            draw('universityTrendsChart', {
                type: 'line',
                data: {
                    labels: data.university_trends.row_keys,
                    datasets: series(data.university_trends, { fill: false, tension: 0.2 })
                },
                options: { plugins: { legend: { position: 'right' } } }
            });

            horizontal('topDistrictsChart', data.top_districts, 'Graduates');

            draw('zoneByYearChart', {
                type: 'line',
                data: {
                    labels: data.zone_by_year.row_keys,
                    datasets: series(data.zone_by_year, { fill: true })
                },
                options: { scales: { y: { stacked: true } }, plugins: { legend: { position: 'right' } } }
            });
        });
        "#
    }
}

/// Escape text for use inside HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
