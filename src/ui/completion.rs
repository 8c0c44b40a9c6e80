// Shell completion generation for gradboard

use clap::Command;
use clap_complete::{Generator, generate};
use std::io::Write;

/// Write a completion script for `app` to `out`
pub fn write_completions<G: Generator, W: Write>(generator: G, app: &mut Command, out: &mut W) {
    let name = app.get_name().to_string();
    generate(generator, app, name, out);
}

/// Print a completion script to stdout
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    write_completions(generator, app, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::cli::Cli;
    use clap::CommandFactory;
    use clap_complete::Shell;

    fn script(shell: Shell) -> String {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        write_completions(shell, &mut cmd, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_completions_bash() {
        let script = script(Shell::Bash);
        assert!(script.contains("gradboard"));
        assert!(script.contains("--html-dashboard"));
    }

    #[test]
    fn test_completions_zsh() {
        assert!(script(Shell::Zsh).contains("--top-universities"));
    }

    #[test]
    fn test_completions_fish() {
        assert!(script(Shell::Fish).contains("completion-generate"));
    }
}
