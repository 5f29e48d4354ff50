//! Cram CLI Application
//!
//! Command-line interface and MCP server for the cram study planner.

mod args;
mod cli;
mod display;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use cram_core::PlannerBuilder;
use log::info;
use mcp::{run_stdio_server, CramMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        user,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Cram started");

    match command {
        Some(Task { command }) => {
            Cli::new(planner, renderer, user)
                .handle_task_command(command)
                .await
        }
        Some(Obstacle { command }) => {
            Cli::new(planner, renderer, user)
                .handle_obstacle_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Cram MCP server");
            run_stdio_server(CramMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer, user).rank_tasks().await,
    }
}
