use crate::cli::Commands;
use anyhow::Result;

pub mod enter;
pub mod info;

/// Dispatch command to appropriate handler
pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Enter {
            pid,
            path,
            kind,
            command,
        } => enter::execute(pid, path.as_deref(), &kind, &command),

        Commands::Info { pid } => info::execute(pid),
    }
}
