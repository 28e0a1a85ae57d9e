mod cmd_config;
mod cmd_init;
mod cmd_inspect;
mod cmd_record;
mod cmd_report;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ferry",
    version,
    about = "Record and report what migrations did to their destinations"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize a new .ferry/ workspace
    Init,
    /// Record the effect of one migration write
    Record(cmd_record::RecordArgs),
    /// Render recorded effects and exit with the run's outcome status
    Report {
        /// Only include effects from this workflow
        #[arg(long)]
        workflow: Option<String>,
        /// Output as JSON (overrides the configured format)
        #[arg(long)]
        json: bool,
        /// List origin revisions under each effect
        #[arg(long)]
        origins: bool,
    },
    /// Show the fields a post-migration script sees for one entry
    Inspect {
        /// Entry id (eff_*) or a unique prefix of it
        entry_id: String,
        /// Print a single field (type, summary, origin_refs, destination_ref, errors)
        #[arg(long)]
        field: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        cmd: cmd_config::ConfigCmd,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FERRY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let repo_root = std::env::current_dir()?;

    match cli.cmd {
        Command::Init => cmd_init::execute(&repo_root),
        Command::Record(args) => cmd_record::execute(&repo_root, args),
        Command::Report {
            workflow,
            json,
            origins,
        } => {
            let code = cmd_report::execute(&repo_root, workflow.as_deref(), json, origins)?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Command::Inspect { entry_id, field } => {
            cmd_inspect::execute(&repo_root, &entry_id, field.as_deref())
        }
        Command::Config { cmd } => cmd_config::run(cmd, &repo_root),
    }
}
