//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::EmployeeId;

/// Organizational hierarchy manager: supervisor moves with undo/redo
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the org chart as a tree
    Tree {
        /// Org chart file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List employees without direct reports
    Leaves {
        /// Org chart file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show an employee's supervisor
    Supervisor {
        /// Org chart file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// Employee id
        id: EmployeeId,
    },

    /// Interactive session: move employees with undo/redo
    Shell {
        /// Org chart file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
