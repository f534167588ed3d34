use clap::{Parser, Subcommand};
use clap_complete::Shell;
use coverwise::cmd;
use std::process;

/// Insurance portfolio savings and recommendation analyzer
///
/// coverwise evaluates an insurance portfolio against stacked discount rules
/// and a battery of coverage heuristics, surfacing savings you already earn
/// and gaps worth closing.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate stacked portfolio discounts
    Savings {
        /// Output as JSON (for scripting)
        #[arg(long)]
        json: bool,

        /// Include optimization suggestions
        #[arg(short, long)]
        suggestions: bool,
    },

    /// Evaluate personalized recommendations
    Recommend {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Request a quote for a recommendation
    Quote {
        /// Recommendation id from `coverwise recommend`
        #[arg(value_name = "ID")]
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the policy portfolio
    Policies {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize coverwise configuration and sample fixtures
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Savings { json, suggestions }) => cmd::cmd_savings(*json, *suggestions),
        Some(Commands::Recommend { json }) => cmd::cmd_recommend(*json),
        Some(Commands::Quote { id, json }) => cmd::cmd_quote(id, *json),
        Some(Commands::Policies { json }) => cmd::cmd_policies(*json),
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("coverwise v{}", env!("CARGO_PKG_VERSION"));
            println!("Insurance portfolio savings and recommendation analyzer\n");
            println!("Usage: coverwise <COMMAND>\n");
            println!("Commands:");
            println!("  savings    Calculate stacked portfolio discounts");
            println!("  recommend  Evaluate personalized recommendations");
            println!("  quote      Request a quote for a recommendation");
            println!("  policies   List the policy portfolio");
            println!("  init       Initialize configuration and sample fixtures");
            println!("\nRun 'coverwise <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use coverwise::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
