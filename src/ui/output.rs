//! Output formatting and display logic for gradboard

use serde::Serialize;

use crate::analysis::{ChartData, CrossTab, DashboardSummary, FrequencyTable, ScalarMetrics};
use crate::core::constants::{display, output_formats};
use crate::core::error::Result;
use crate::core::types::Table;
use crate::ui::color::{Colors, colorize};

/// Document printed by `--format json`
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub source: &'a str,
    pub metrics: &'a ScalarMetrics,
    pub charts: &'a ChartData,
    pub records: &'a Table,
}

/// Display the analysis based on output format
pub fn display_results(
    source: &str,
    summary: &DashboardSummary,
    table: &Table,
    output_format: &str,
    quiet: bool,
) -> Result<()> {
    match output_format {
        output_formats::MINIMAL => print!("{}", render_minimal(&summary.metrics)),
        output_formats::JSON => println!("{}", render_json(source, summary, table)?),
        _ => {
            if !quiet {
                print!("{}", render_text(source, summary));
            }
        }
    }
    Ok(())
}

/// One `key: value` line per metric, no colors
pub fn render_minimal(metrics: &ScalarMetrics) -> String {
    format!(
        "total_graduates: {}\nuniversities: {}\ncountries: {}\nmale_percentage: {:.1}\nyear_range: {}\n",
        metrics.total_graduates,
        metrics.universities,
        metrics.countries,
        metrics.male_percentage,
        metrics.year_range
    )
}

pub fn render_json(source: &str, summary: &DashboardSummary, table: &Table) -> Result<String> {
    let report = JsonReport {
        source,
        metrics: &summary.metrics,
        charts: &summary.charts,
        records: table,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Metric cards and ranked tables with colors and emojis
pub fn render_text(source: &str, summary: &DashboardSummary) -> String {
    let metrics = &summary.metrics;
    let charts = &summary.charts;
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} {}\n",
        display::GRADUATES_EMOJI,
        heading("Graduate Data Analytics"),
        colorize(source, Colors::BRIGHT_BLACK)
    ));

    out.push_str(&section(display::CHART_EMOJI, "Key Metrics"));
    for (label, value) in [
        ("Total Graduates", format_count(metrics.total_graduates)),
        ("Universities", metrics.universities.to_string()),
        ("Countries", metrics.countries.to_string()),
        ("Male %", format!("{:.1}%", metrics.male_percentage)),
        ("Year Range", metrics.year_range.to_string()),
    ] {
        out.push_str(&format!(
            "   {:<18}{}\n",
            label,
            colorize(&value, Colors::BRIGHT_CYAN)
        ));
    }

    if metrics.total_graduates == 0 {
        out.push_str(&format!(
            "\n   {}\n",
            colorize("No records in the input file", Colors::YELLOW)
        ));
        return out;
    }

    out.push_str(&section(display::CALENDAR_EMOJI, "Graduation Trends Over Time"));
    out.push_str(&render_ranking(&charts.graduation_trend, Colors::BLUE));

    out.push_str(&section(display::GENDER_EMOJI, "Gender Distribution"));
    out.push_str(&render_shares(&charts.gender_distribution));

    out.push_str(&section(display::CALENDAR_EMOJI, "Gender Trends by Year"));
    out.push_str(&render_crosstab(&charts.gender_by_year));

    out.push_str(&section(display::LOCATION_EMOJI, "Gender Distribution by Zone"));
    out.push_str(&render_crosstab(&charts.gender_by_zone));

    out.push_str(&section(display::COUNTRY_EMOJI, "Country Distribution"));
    out.push_str(&render_ranking(&charts.country_distribution, Colors::GREEN));

    out.push_str(&section(display::UNIVERSITY_EMOJI, "Top Universities"));
    out.push_str(&render_ranking(&charts.top_universities, Colors::MAGENTA));

    out.push_str(&section(display::UNIVERSITY_EMOJI, "University Enrollment Trends"));
    out.push_str(&render_crosstab(&charts.university_trends.transposed()));

    out.push_str(&section(
        display::LOCATION_EMOJI,
        &format!("Top {} Districts", charts.top_districts.len()),
    ));
    out.push_str(&render_ranking(&charts.top_districts, Colors::CYAN));

    out.push_str(&section(display::CALENDAR_EMOJI, "Zone Distribution Over Time"));
    out.push_str(&render_crosstab(&charts.zone_by_year));

    out
}

fn heading(text: &str) -> String {
    colorize(&colorize(text, Colors::BOLD), Colors::BRIGHT_CYAN)
}

fn section(emoji: &str, title: &str) -> String {
    format!("\n{} {}\n", emoji, heading(title))
}

/// Horizontal bar chart of a frequency table
fn render_ranking(frequency: &FrequencyTable, color: &str) -> String {
    let max = frequency.counts.iter().map(|c| c.count).max().unwrap_or(0);
    let labels: Vec<String> = frequency.counts.iter().map(|c| truncate_label(&c.value)).collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    frequency
        .counts
        .iter()
        .zip(&labels)
        .map(|(entry, label)| {
            format!(
                "   {}  {} {}\n",
                pad(label, width),
                colorize(&bar(entry.count, max), color),
                entry.count
            )
        })
        .collect()
}

/// Frequency table with the share of each category
fn render_shares(frequency: &FrequencyTable) -> String {
    let width = frequency
        .counts
        .iter()
        .map(|c| c.value.chars().count())
        .max()
        .unwrap_or(0);

    frequency
        .counts
        .iter()
        .zip(frequency.percentages())
        .map(|(entry, share)| {
            format!(
                "   {}  {} {}\n",
                pad(&entry.value, width),
                entry.count,
                colorize(&format!("({share:.1}%)"), Colors::DIM)
            )
        })
        .collect()
}

/// Cross-tabulation as a grid with a total column
fn render_crosstab(crosstab: &CrossTab) -> String {
    let row_labels: Vec<String> = crosstab.row_keys.iter().map(|k| truncate_label(k)).collect();
    let row_width = row_labels
        .iter()
        .map(|k| k.chars().count())
        .max()
        .unwrap_or(0)
        .max(crosstab.row_label.chars().count());
    let column_widths: Vec<usize> = crosstab
        .column_keys
        .iter()
        .map(|k| k.chars().count().max(3))
        .collect();

    let mut out = format!("   {}", pad(&crosstab.row_label, row_width));
    for (key, width) in crosstab.column_keys.iter().zip(&column_widths) {
        out.push_str(&format!("  {}", colorize(&pad(key, *width), Colors::BOLD)));
    }
    out.push_str(&format!("  {}\n", colorize("Total", Colors::BOLD)));

    for (label, counts) in row_labels.iter().zip(&crosstab.counts) {
        out.push_str(&format!("   {}", pad(label, row_width)));
        for (count, &width) in counts.iter().zip(&column_widths) {
            out.push_str(&format!("  {count:>width$}"));
        }
        let total: usize = counts.iter().sum();
        out.push_str(&format!("  {total:>5}\n"));
    }
    out
}

/// Bar proportional to `count`, at least one block for a non-zero count
fn bar(count: usize, max: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let length = (count * display::MAX_BAR_WIDTH).div_ceil(max).max(1);
    "█".repeat(length)
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= display::MAX_LABEL_WIDTH {
        label.to_string()
    } else {
        let kept: String = label.chars().take(display::MAX_LABEL_WIDTH - 1).collect();
        format!("{kept}…")
    }
}

/// Integer with thousands separators, e.g. `12,345`
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}
