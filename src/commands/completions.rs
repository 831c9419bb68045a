//! Shell completions command

use clap::CommandFactory;
use std::io::Write;

use crate::cli::CompletionsArgs;
use crate::error::Result;

/// Generate shell completions to stdout
pub fn run(args: &CompletionsArgs) -> Result<()> {
    generate(args, &mut std::io::stdout().lock())
}

fn generate(args: &CompletionsArgs, out: &mut impl Write) -> Result<()> {
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(args.shell, &mut cmd, "skillfix", &mut *out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    fn completions_for(shell: Shell) -> String {
        let mut out = Vec::new();
        generate(&CompletionsArgs { shell }, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_completions_bash() {
        assert!(completions_for(Shell::Bash).contains("skillfix"));
    }

    #[test]
    fn test_completions_zsh() {
        assert!(completions_for(Shell::Zsh).contains("skillfix"));
    }

    #[test]
    fn test_completions_fish() {
        let script = completions_for(Shell::Fish);
        assert!(script.contains("dry-run"));
    }

    #[test]
    fn test_completions_other_shells() {
        assert!(!completions_for(Shell::Elvish).is_empty());
        assert!(!completions_for(Shell::PowerShell).is_empty());
    }
}
