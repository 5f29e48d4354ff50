//! Command definitions and handlers for the terminal interface.
//!
//! Argument structs carry the clap derives; each converts into the matching
//! core parameter type with `into_params`, adding the user selected by the
//! global `--user` flag:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner → Display wrapper
//! ```
//!
//! Core parameter types stay free of clap attributes so the MCP server can
//! reuse them unchanged.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cram_core::{
    params::{
        AddObstacle, AddTask, NewObstacle, NewTask, ObstacleRef, PlanDay, SetTaskDone, SlotQuery,
        UserScope,
    },
    Day, Planner,
};
use log::debug;

use crate::{
    display::{
        GridView, ObstacleLines, ObstacleView, OperationStatus, PlanView, RankedLines, SlotView,
        TaskLines, TaskView,
    },
    renderer::TerminalRenderer,
};

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// Add a study task
#[derive(Args)]
pub struct AddTaskArgs {
    /// Title of the task
    pub title: String,
    #[arg(short, long, default_value = "", help = "Subject the task belongs to")]
    pub subject: String,
    #[arg(long, help = "Due date as YYYY-MM-DD")]
    pub deadline: String,
    #[arg(long, help = "How hard the task is (1-5)")]
    pub difficulty: u8,
    #[arg(long, help = "How much the task matters (1-5)")]
    pub importance: u8,
    #[arg(short, long, help = "Estimated effort in hours (1-10)")]
    pub workload: u8,
}

impl AddTaskArgs {
    pub fn into_params(self, user: String) -> AddTask {
        AddTask {
            user,
            task: NewTask {
                title: self.title,
                subject: self.subject,
                deadline: self.deadline,
                difficulty: self.difficulty,
                importance: self.importance,
                workload: self.workload,
            },
        }
    }
}

/// Identify a task by ID
#[derive(Args)]
pub struct TaskIdArgs {
    #[arg(help = "Identifier of the task")]
    pub id: u64,
}

impl TaskIdArgs {
    pub fn into_params(self, user: String, done: bool) -> SetTaskDone {
        SetTaskDone {
            user,
            id: self.id,
            done,
        }
    }
}

/// Build a study plan for today
#[derive(Args)]
pub struct PlanDayArgs {
    #[arg(long, default_value_t = 4, help = "Hours available for studying today (1-24)")]
    pub hours: u8,
}

impl PlanDayArgs {
    pub fn into_params(self, user: String) -> PlanDay {
        PlanDay {
            user,
            hours: self.hours,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a study task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Mark a task as done
    #[command(alias = "d")]
    Done(TaskIdArgs),
    /// Mark a finished task as not done
    #[command(alias = "u")]
    Undo(TaskIdArgs),
    /// List tasks in the order they were added
    #[command(aliases = ["l", "ls"])]
    List,
    /// List tasks by priority, finished tasks last
    #[command(alias = "r")]
    Rank,
    /// List unfinished tasks by priority
    #[command(alias = "p")]
    Pending,
    /// Remove tasks finished more than a day ago
    Prune,
    /// Pick today's tasks within the available hours
    Plan(PlanDayArgs),
}

/// Add a weekly obstacle
///
/// The obstacle blocks the hours `start` up to but not including `end`.
/// Later obstacles take precedence where they overlap earlier ones.
#[derive(Args)]
pub struct AddObstacleArgs {
    #[arg(help = "Day of the week (Mon..Sun or Monday..Sunday)")]
    pub day: String,
    #[arg(help = "First blocked hour (0-23)")]
    pub start: u8,
    #[arg(help = "First free hour after the block (1-24)")]
    pub end: u8,
    #[arg(default_value = "", help = "What you are busy with")]
    pub label: String,
}

impl AddObstacleArgs {
    pub fn into_params(self, user: String) -> AddObstacle {
        AddObstacle {
            user,
            obstacle: NewObstacle {
                day: self.day,
                start_hour: self.start,
                end_hour: self.end,
                label: self.label,
            },
        }
    }
}

/// Identify an obstacle by ID
#[derive(Args)]
pub struct ObstacleIdArgs {
    #[arg(help = "Identifier of the obstacle")]
    pub id: u64,
}

impl ObstacleIdArgs {
    pub fn into_params(self, user: String) -> ObstacleRef {
        ObstacleRef { user, id: self.id }
    }
}

/// Check one hour slot
#[derive(Args)]
pub struct SlotArgs {
    #[arg(help = "Day of the week (Mon..Sun or Monday..Sunday)")]
    pub day: String,
    #[arg(help = "Hour of the day (0-23)")]
    pub hour: u8,
}

impl SlotArgs {
    pub fn into_params(self, user: String) -> SlotQuery {
        SlotQuery {
            user,
            day: self.day,
            hour: self.hour,
        }
    }
}

#[derive(Subcommand)]
pub enum ObstacleCommands {
    /// Add a weekly obstacle
    #[command(alias = "a")]
    Add(AddObstacleArgs),
    /// List obstacles in the order they were added
    #[command(aliases = ["l", "ls"])]
    List,
    /// Remove an obstacle
    #[command(aliases = ["rm"])]
    Remove(ObstacleIdArgs),
    /// Show whether an hour slot is free
    #[command(alias = "s")]
    Status(SlotArgs),
    /// Show the whole week as a grid
    #[command(alias = "g")]
    Grid,
    /// Remove every obstacle
    Reset,
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs CLI commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    user: String,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, user: String) -> Self {
        Self {
            planner,
            renderer,
            user,
        }
    }

    fn scope(&self) -> UserScope {
        UserScope {
            user: self.user.clone(),
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        debug!("Task command for user '{}'", self.user);
        match command {
            TaskCommands::Add(args) => self.add_task(args.into_params(self.user.clone())).await,
            TaskCommands::Done(args) => {
                self.set_task_done(args.into_params(self.user.clone(), true))
                    .await
            }
            TaskCommands::Undo(args) => {
                self.set_task_done(args.into_params(self.user.clone(), false))
                    .await
            }
            TaskCommands::List => self.list_tasks().await,
            TaskCommands::Rank => self.rank_tasks().await,
            TaskCommands::Pending => self.pending_tasks().await,
            TaskCommands::Prune => self.prune_tasks().await,
            TaskCommands::Plan(args) => self.daily_plan(args.into_params(self.user.clone())).await,
        }
    }

    pub async fn handle_obstacle_command(&self, command: ObstacleCommands) -> Result<()> {
        debug!("Obstacle command for user '{}'", self.user);
        match command {
            ObstacleCommands::Add(args) => {
                self.add_obstacle(args.into_params(self.user.clone())).await
            }
            ObstacleCommands::List => self.list_obstacles().await,
            ObstacleCommands::Remove(args) => {
                self.remove_obstacle(args.into_params(self.user.clone()))
                    .await
            }
            ObstacleCommands::Status(args) => {
                self.slot_status(args.into_params(self.user.clone())).await
            }
            ObstacleCommands::Grid => self.weekly_grid().await,
            ObstacleCommands::Reset => self.reset_obstacles().await,
        }
    }

    async fn add_task(&self, params: AddTask) -> Result<()> {
        let task = self
            .planner
            .add_task(&params)
            .await
            .context("Failed to add task")?;

        let output = format!("Created task with ID: {}\n\n{}", task.id, TaskView(&task));
        self.renderer.render(&output)
    }

    async fn set_task_done(&self, params: SetTaskDone) -> Result<()> {
        let task = self
            .planner
            .set_task_done(&params)
            .await
            .with_context(|| format!("Failed to update task {}", params.id))?;

        let state = if task.done { "done" } else { "not done" };
        let status = OperationStatus::success(format!("Marked task {} as {state}", task.id));
        self.renderer.render(&status.to_string())
    }

    async fn list_tasks(&self) -> Result<()> {
        let tasks = self
            .planner
            .list_tasks(&self.scope())
            .await
            .context("Failed to list tasks")?;

        self.renderer
            .render(&format!("# Tasks\n\n{}", TaskLines(&tasks)))
    }

    /// Renders every task in priority order.
    pub async fn rank_tasks(&self) -> Result<()> {
        let ranked = self
            .planner
            .rank_tasks(&self.scope())
            .await
            .context("Failed to rank tasks")?;

        self.renderer
            .render(&format!("# Ranked Tasks\n\n{}", RankedLines(&ranked)))
    }

    async fn pending_tasks(&self) -> Result<()> {
        let ranked = self
            .planner
            .pending_tasks(&self.scope())
            .await
            .context("Failed to list pending tasks")?;

        self.renderer
            .render(&format!("# Pending Tasks\n\n{}", RankedLines(&ranked)))
    }

    async fn prune_tasks(&self) -> Result<()> {
        let removed = self
            .planner
            .sweep(&self.scope())
            .await
            .context("Failed to prune tasks")?;

        let status = OperationStatus::success(format!("Removed {removed} completed task(s)"));
        self.renderer.render(&status.to_string())
    }

    async fn daily_plan(&self, params: PlanDay) -> Result<()> {
        let plan = self
            .planner
            .daily_plan(&params)
            .await
            .context("Failed to build study plan")?;

        self.renderer.render(&PlanView(&plan).to_string())
    }

    async fn add_obstacle(&self, params: AddObstacle) -> Result<()> {
        let obstacle = self
            .planner
            .add_obstacle(&params)
            .await
            .context("Failed to add obstacle")?;

        let status = OperationStatus::success(format!("Added obstacle {}", ObstacleView(&obstacle)));
        self.renderer.render(&status.to_string())
    }

    async fn list_obstacles(&self) -> Result<()> {
        let obstacles = self
            .planner
            .list_obstacles(&self.scope())
            .await
            .context("Failed to list obstacles")?;

        self.renderer
            .render(&format!("# Obstacles\n\n{}", ObstacleLines(&obstacles)))
    }

    async fn remove_obstacle(&self, params: ObstacleRef) -> Result<()> {
        let obstacle = self
            .planner
            .remove_obstacle(&params)
            .await
            .with_context(|| format!("Failed to remove obstacle {}", params.id))?;

        let status =
            OperationStatus::success(format!("Removed obstacle {}", ObstacleView(&obstacle)));
        self.renderer.render(&status.to_string())
    }

    async fn slot_status(&self, params: SlotQuery) -> Result<()> {
        let day: Day = params.day.parse().context("Failed to check slot")?;
        let status = self
            .planner
            .slot_status(&params)
            .await
            .context("Failed to check slot")?;

        let view = SlotView {
            day,
            hour: params.hour,
            status: &status,
        };
        self.renderer.render(&view.to_string())
    }

    async fn weekly_grid(&self) -> Result<()> {
        let grid = self
            .planner
            .weekly_grid(&self.scope())
            .await
            .context("Failed to build weekly grid")?;

        self.renderer.render(&GridView(&grid).to_string())
    }

    async fn reset_obstacles(&self) -> Result<()> {
        let removed = self
            .planner
            .reset_obstacles(&self.scope())
            .await
            .context("Failed to reset obstacles")?;

        let status = OperationStatus::success(format!("Removed {removed} obstacle(s)"));
        self.renderer.render(&status.to_string())
    }
}
