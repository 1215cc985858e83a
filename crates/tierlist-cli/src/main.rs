// Rust guideline compliant 2026-10-15

//! Tierlist CLI Application
//!
//! Command-line interface for building tier list boards from session scripts.

use clap::Parser;
use std::path::PathBuf;
use tierlist_app::AppContext;
use tierlist_cli::commands::{self, run::RunOptions};
use tierlist_cli::{create_formatter, init_tracing, should_use_color};
use tierlist_core::{Config, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "tierlist",
    version,
    about = "Tierlist: rank entries into named tiers",
    long_about = "Tierlist keeps entries and tiers consistent while you rank them. A board is driven by a session script, one command per line.",
    after_help = "Examples:\n  tierlist init\n  tierlist board --format plain\n  tierlist run session.tier --check\n  echo 'add cat.png --tier S' | tierlist run - --json\n  tierlist templates --name anime --tag 2023\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory holding tierlist.toml
    #[arg(long, global = true, default_value = ".")]
    config: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write a default tierlist.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the board a new session starts with
    Board,

    /// Run a session script ('-' for stdin)
    Run {
        /// Script path
        script: String,

        /// Verify store invariants after every line
        #[arg(long)]
        check: bool,

        /// Continue after a failed line
        #[arg(long)]
        keep_going: bool,
    },

    /// Query board templates
    Templates {
        /// Template name
        #[arg(long)]
        name: Option<String>,

        /// Template tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
}

/// Picks the output format: `--format`, then `--json`, then the config file.
fn resolve_format(cli: &Cli, config: Option<&Config>) -> OutputFormat {
    match (cli.format, cli.json) {
        (Some(format), _) => format.into(),
        (None, true) => OutputFormat::Json,
        (None, false) => config.map(|c| c.output_format).unwrap_or_default(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command.as_ref() else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let use_color = !cli.no_color && should_use_color();

    if let Commands::Init { force } = command {
        let format = resolve_format(&cli, None);
        init_tracing(&cli.log_level, format == OutputFormat::Json)?;
        let formatter = create_formatter(format);
        return commands::init::execute(&cli.config, *force, formatter.as_ref());
    }

    let config = Config::load(&cli.config)?;
    let format = resolve_format(&cli, Some(&config));
    init_tracing(&cli.log_level, format == OutputFormat::Json)?;
    let formatter = create_formatter(format);

    match command {
        Commands::Init { .. } => {}
        Commands::Board => {
            let ctx = AppContext::new(config)?;
            commands::board::execute(&ctx, formatter.as_ref())?;
        }
        Commands::Run {
            script,
            check,
            keep_going,
        } => {
            let mut ctx = AppContext::new(config)?;
            let options = RunOptions {
                check: *check,
                keep_going: *keep_going,
                json_errors: format == OutputFormat::Json,
                use_color,
            };
            commands::run::execute(&mut ctx, script, options, formatter.as_ref())?;
        }
        Commands::Templates { name, tags } => {
            commands::templates::execute(name.clone(), tags.clone(), formatter.as_ref())?;
        }
    }

    Ok(())
}
