use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    skillfix completions --shell bash > ~/.bash_completion.d/skillfix\n\n\
                  Generate zsh completions:\n    skillfix completions --shell zsh > ~/.zfunc/_skillfix\n\n\
                  Generate fish completions:\n    skillfix completions --shell fish > ~/.config/fish/completions/skillfix.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
