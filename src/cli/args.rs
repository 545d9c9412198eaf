//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;

/// Random-descent binary trees with ancestor path highlighting
#[derive(Parser, Debug)]
#[command(name = "randtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .randtree.toml
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree from comma-separated values and print it
    Build {
        /// Values, e.g. "5,3,8"
        #[arg(allow_hyphen_values = true)]
        input: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Build a tree and highlight the path to one node
    Path {
        /// Values, e.g. "5,3,8"
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Position of the node's value in the input (0-based)
        position: usize,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Interactive session reading commands from stdin
    Session {
        /// Seed for the descent coin
        #[arg(short, long)]
        seed: Option<u64>,

        /// Disable colors
        #[arg(long)]
        no_color: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by commands that print a tree.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Seed for the descent coin (same seed, same shape)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a template config file
    Template,
    /// Show config file locations
    Path,
}
