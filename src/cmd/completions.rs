//! Completions command implementation
//!
//! Handles the `coverwise completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// coverwise completions bash > /etc/bash_completion.d/coverwise
///
/// # Zsh
/// coverwise completions zsh > ~/.zfunc/_coverwise
///
/// # Fish
/// coverwise completions fish > ~/.config/fish/completions/coverwise.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    // We need to re-create the command structure here since Cli is in main.rs
    // This uses clap's builder API to generate completions
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("coverwise")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Insurance portfolio savings and recommendation analyzer")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("savings").about("Calculate stacked portfolio discounts"))
        .subcommand(Command::new("recommend").about("Evaluate personalized recommendations"))
        .subcommand(Command::new("quote").about("Request a quote for a recommendation"))
        .subcommand(Command::new("policies").about("List the policy portfolio"))
        .subcommand(Command::new("init").about("Initialize coverwise configuration"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "coverwise".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
