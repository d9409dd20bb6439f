//! CLI argument definitions

use clap::{Parser, Subcommand};
use nsjoin::NamespaceKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nsjoin")]
#[command(about = "Join existing Linux namespaces by descriptor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enter namespaces of a target process and run a command
    Enter {
        /// Target process whose namespaces to join
        #[arg(short, long, required_unless_present = "path")]
        pid: Option<u32>,

        /// Namespace file to join instead of a process (e.g. /run/netns/blue)
        #[arg(long, conflicts_with = "pid")]
        path: Option<PathBuf>,

        /// Namespace kinds to join, in order (net, pid, mnt, ipc, uts, user)
        #[arg(short, long, value_delimiter = ',', default_value = "net")]
        kind: Vec<NamespaceKind>,

        /// Command to run after joining (default: interactive shell)
        #[arg(last = true)]
        command: Vec<String>,
    },

    /// Show namespace membership for a process
    Info {
        /// Process ID (default: current process)
        #[arg(short, long)]
        pid: Option<u32>,
    },
}
