//! MCP server implementation for Cram
//!
//! Exposes the planner to AI assistants over the Model Context Protocol.
//! Every tool takes a `user` field; tasks and obstacles of different users
//! never mix.

use anyhow::Result;
use cram_core::Planner;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    AddObstacle, AddTask, McpResult, ObstacleRef, PlanDay, SetTaskDone, SlotQuery, UserScope,
};

/// MCP server for Cram
#[derive(Clone)]
pub struct CramMcpServer {
    planner: Planner,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CramMcpServer {
    /// Create a new Cram MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "add_task",
        description = "Add a study task for a user. Requires title, deadline (YYYY-MM-DD), difficulty (1-5), importance (1-5) and workload in hours (1-10); subject is optional. Past deadlines are accepted and show up as overdue. Returns the new task ID."
    )]
    async fn add_task(&self, params: Parameters<AddTask>) -> McpResult {
        self.handlers().add_task(params).await
    }

    #[tool(
        name = "set_task_done",
        description = "Mark a task as done (done=true) or reopen it (done=false). Finished tasks stay visible for 24 hours after completion and are then removed automatically."
    )]
    async fn set_task_done(&self, params: Parameters<SetTaskDone>) -> McpResult {
        self.handlers().set_task_done(params).await
    }

    #[tool(
        name = "list_tasks",
        description = "List a user's tasks in the order they were added, including finished tasks still inside their 24 hour grace window."
    )]
    async fn list_tasks(&self, params: Parameters<UserScope>) -> McpResult {
        self.handlers().list_tasks(params).await
    }

    #[tool(
        name = "rank_tasks",
        description = "List a user's tasks by priority. Score = importance*2 + difficulty + workload + urgency, where urgency grows from 0 to 10 as the deadline approaches. Unfinished tasks always come before finished ones; ties go to the earlier deadline."
    )]
    async fn rank_tasks(&self, params: Parameters<UserScope>) -> McpResult {
        self.handlers().rank_tasks(params).await
    }

    #[tool(
        name = "pending_tasks",
        description = "List only the unfinished tasks of a user, highest priority first."
    )]
    async fn pending_tasks(&self, params: Parameters<UserScope>) -> McpResult {
        self.handlers().pending_tasks(params).await
    }

    #[tool(
        name = "daily_plan",
        description = "Pick today's tasks in priority order until the available study hours (1-24) are used up. Each task consumes its workload; the last pick may run over and the overshoot is reported."
    )]
    async fn daily_plan(&self, params: Parameters<PlanDay>) -> McpResult {
        self.handlers().daily_plan(params).await
    }

    #[tool(
        name = "prune_tasks",
        description = "Remove a user's tasks that were finished more than 24 hours ago. Returns how many were removed. Reads already hide such tasks, so this is only needed to compact storage."
    )]
    async fn prune_tasks(&self, params: Parameters<UserScope>) -> McpResult {
        self.handlers().prune_tasks(params).await
    }

    #[tool(
        name = "add_obstacle",
        description = "Add a weekly obstacle (class, job, meal) that blocks hours start_hour up to but not including end_hour on a day (Mon..Sun). start_hour is 0-23, end_hour is 1-24. Overlaps are allowed; the most recently added obstacle wins where they overlap."
    )]
    async fn add_obstacle(&self, params: Parameters<AddObstacle>) -> McpResult {
        self.handlers().add_obstacle(params).await
    }

    #[tool(
        name = "list_obstacles",
        description = "List a user's weekly obstacles in the order they were added."
    )]
    async fn list_obstacles(&self, params: Parameters<UserScope>) -> McpResult {
        self.handlers().list_obstacles(params).await
    }

    #[tool(
        name = "remove_obstacle",
        description = "Remove one weekly obstacle by ID. Hours it covered become free unless an older obstacle also covers them."
    )]
    async fn remove_obstacle(&self, params: Parameters<ObstacleRef>) -> McpResult {
        self.handlers().remove_obstacle(params).await
    }

    #[tool(
        name = "slot_status",
        description = "Check whether a user is free at a given day (Mon..Sun) and hour (0-23). Busy slots name the obstacle that blocks them."
    )]
    async fn slot_status(&self, params: Parameters<SlotQuery>) -> McpResult {
        self.handlers().slot_status(params).await
    }

    #[tool(
        name = "weekly_grid",
        description = "Show a user's whole week as 7 rows of 24 hour slots, with free hours per day and for the week."
    )]
    async fn weekly_grid(&self, params: Parameters<UserScope>) -> McpResult {
        self.handlers().weekly_grid(params).await
    }

    #[tool(
        name = "reset_obstacles",
        description = "Remove every weekly obstacle of a user, leaving all 168 hours free. Returns how many were removed."
    )]
    async fn reset_obstacles(&self, params: Parameters<UserScope>) -> McpResult {
        self.handlers().reset_obstacles(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CramMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(r#"Cram helps students decide what to study next and when they have time for it.

## Core Concepts
- **Tasks**: study work with a deadline, difficulty, importance and workload in hours
- **Obstacles**: recurring weekly blocks (classes, jobs, meals) that make hours unavailable
- **Users**: every tool takes a `user`; data of different users never mixes

## Workflow
1. Add tasks with `add_task` and weekly commitments with `add_obstacle`
2. Use `rank_tasks` or `pending_tasks` to see what matters most right now
3. Use `weekly_grid` or `slot_status` to find free hours
4. Use `daily_plan` to pick what fits into today's study time
5. Mark work finished with `set_task_done`; finished tasks disappear after 24 hours

## Tool Categories
- **Tasks**: add_task, set_task_done, list_tasks, rank_tasks, pending_tasks, daily_plan, prune_tasks
- **Calendar**: add_obstacle, list_obstacles, remove_obstacle, slot_status, weekly_grid, reset_obstacles"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CramMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Cram MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
