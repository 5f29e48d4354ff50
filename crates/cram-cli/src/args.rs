use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ObstacleCommands, TaskCommands};

/// Main command-line interface for the Cram study planner
///
/// Cram ranks study tasks by importance, difficulty, workload and deadline
/// urgency, and keeps a weekly calendar of obstacles (classes, work, meals)
/// so you can see which hours are free for studying. It also runs as an MCP
/// (Model Context Protocol) server for integration with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "cram")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cram/cram.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// User whose tasks and obstacles to operate on
    #[arg(long, global = true, env = "CRAM_USER", default_value = "default")]
    pub user: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Cram CLI
///
/// - `task`: add, complete, list and rank study tasks
/// - `obstacle`: manage the weekly obstacle calendar
/// - `serve`: start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Manage study tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage weekly obstacles
    #[command(alias = "o")]
    Obstacle {
        #[command(subcommand)]
        command: ObstacleCommands,
    },
    /// Start the MCP server
    Serve,
}
