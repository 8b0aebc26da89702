mod cmd_attach;
mod cmd_config;
mod cmd_release;
mod cmd_status;
mod cmd_sweep;
mod cmd_watch;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "berth", version, about = "Single-attach coordination for debugger ports")]
struct Cli {
    /// Shared store directory (defaults to the per-host temp location)
    #[arg(long, global = true)]
    store: Option<std::path::PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Poll for debuggable processes and coordinate auto-attach
    Watch,
    /// Show the active window, current leases, and discovered targets
    Status,
    /// Attach to a port now (defaults to the configured default port)
    Attach {
        /// Port to attach to
        port: Option<u16>,
    },
    /// Inspect or clear the lease on a port
    Release {
        port: u16,
        /// Delete the lease even if another peer holds it
        #[arg(long)]
        force: bool,
    },
    /// Delete stale and corrupt shared records once
    Sweep,
    /// Inspect or edit settings
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Subcommand)]
enum ConfigCmd {
    /// Print current settings
    Show,
    /// Set a settings key: live_monitor, auto_attach, default_port, attach_command
    Set { key: String, value: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let root = cli
        .store
        .unwrap_or_else(berth_store::StorePaths::default_root);
    let paths = berth_store::StorePaths::discover(root);

    match cli.cmd {
        Command::Watch => cmd_watch::execute(&paths),
        Command::Status => cmd_status::execute(&paths),
        Command::Attach { port } => cmd_attach::execute(&paths, port),
        Command::Release { port, force } => cmd_release::execute(&paths, port, force),
        Command::Sweep => cmd_sweep::execute(&paths),
        Command::Config { cmd } => match cmd {
            ConfigCmd::Show => cmd_config::show(),
            ConfigCmd::Set { key, value } => cmd_config::set(&key, &value),
        },
    }
}
