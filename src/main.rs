use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cellbook::model::{DocumentId, SortField, SortOrder};

mod cli_exec;

#[derive(Parser)]
#[command(name = "cellbook")]
#[command(about = "Spreadsheet documents on a remote service", long_about = None)]
struct Cli {
    /// Data directory for config and session (defaults to ./.cellbook)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the remote base URL for this invocation
    #[arg(long, global = true)]
    url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session locally
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and log in
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long = "confirm-password")]
        confirm_password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Show or change client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// List documents
    List {
        #[arg(long, default_value = "name")]
        sort: SortField,
        #[arg(long, default_value = "asc")]
        order: SortOrder,
    },

    /// Print one document
    Show {
        id: DocumentId,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a document
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Initial grid as a JSON array of rows (defaults to a blank 5x5 grid)
        #[arg(long)]
        grid: Option<String>,
    },

    /// Change a document's fields or cells
    Edit {
        id: DocumentId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Cell assignment ROW:COL=VALUE (zero-based), repeatable
        #[arg(long = "set", value_name = "ROW:COL=VALUE")]
        set: Vec<String>,
    },

    /// Delete a document
    Delete {
        id: DocumentId,
        /// Confirm the deletion; it cannot be undone
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Persist the remote base URL (e.g. http://localhost:3001/api)
    SetUrl { url: String },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("cellbook={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let ctx = cli_exec::Ctx::new(cli.data_dir, cli.url)?;
    cli_exec::handle_command(&ctx, cli.command)
}
