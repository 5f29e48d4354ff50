//! MCP tool handlers implementation

use cram_core::{params as core, Day, Planner};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;
use crate::display::{
    GridView, ObstacleLines, ObstacleView, OperationStatus, PlanView, RankedLines, SlotView,
    TaskLines, TaskView,
};

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Wraps a core parameter type in a transparent serde container so the MCP
// layer gets Deserialize and JsonSchema without the core depending on rmcp.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type UserScope = McpParams<core::UserScope>;
pub type AddTask = McpParams<core::AddTask>;
pub type SetTaskDone = McpParams<core::SetTaskDone>;
pub type PlanDay = McpParams<core::PlanDay>;
pub type AddObstacle = McpParams<core::AddObstacle>;
pub type ObstacleRef = McpParams<core::ObstacleRef>;
pub type SlotQuery = McpParams<core::SlotQuery>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(output.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Planner,
}

impl McpHandlers {
    pub fn new(planner: Planner) -> Self {
        Self { planner }
    }

    pub async fn add_task(&self, Parameters(params): Parameters<AddTask>) -> McpResult {
        debug!("add_task: {:?}", params);

        let task = self
            .planner
            .add_task(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add task", &e))?;

        text(format!(
            "Created task with ID: {}\n\n{}",
            task.id,
            TaskView(&task)
        ))
    }

    pub async fn set_task_done(&self, Parameters(params): Parameters<SetTaskDone>) -> McpResult {
        debug!("set_task_done: {:?}", params);

        let task = self
            .planner
            .set_task_done(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update task", &e))?;

        let state = if task.done { "done" } else { "not done" };
        text(OperationStatus::success(format!("Marked task {} as {state}", task.id)).to_string())
    }

    pub async fn list_tasks(&self, Parameters(params): Parameters<UserScope>) -> McpResult {
        debug!("list_tasks: {:?}", params);

        let tasks = self
            .planner
            .list_tasks(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list tasks", &e))?;

        text(format!("# Tasks\n\n{}", TaskLines(&tasks)))
    }

    pub async fn rank_tasks(&self, Parameters(params): Parameters<UserScope>) -> McpResult {
        debug!("rank_tasks: {:?}", params);

        let ranked = self
            .planner
            .rank_tasks(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to rank tasks", &e))?;

        text(format!("# Ranked Tasks\n\n{}", RankedLines(&ranked)))
    }

    pub async fn pending_tasks(&self, Parameters(params): Parameters<UserScope>) -> McpResult {
        debug!("pending_tasks: {:?}", params);

        let ranked = self
            .planner
            .pending_tasks(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list pending tasks", &e))?;

        text(format!("# Pending Tasks\n\n{}", RankedLines(&ranked)))
    }

    pub async fn daily_plan(&self, Parameters(params): Parameters<PlanDay>) -> McpResult {
        debug!("daily_plan: {:?}", params);

        let plan = self
            .planner
            .daily_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to build study plan", &e))?;

        text(PlanView(&plan).to_string())
    }

    pub async fn prune_tasks(&self, Parameters(params): Parameters<UserScope>) -> McpResult {
        debug!("prune_tasks: {:?}", params);

        let removed = self
            .planner
            .sweep(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to prune tasks", &e))?;

        text(OperationStatus::success(format!("Removed {removed} completed task(s)")).to_string())
    }

    pub async fn add_obstacle(&self, Parameters(params): Parameters<AddObstacle>) -> McpResult {
        debug!("add_obstacle: {:?}", params);

        let obstacle = self
            .planner
            .add_obstacle(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add obstacle", &e))?;

        text(
            OperationStatus::success(format!("Added obstacle {}", ObstacleView(&obstacle)))
                .to_string(),
        )
    }

    pub async fn list_obstacles(&self, Parameters(params): Parameters<UserScope>) -> McpResult {
        debug!("list_obstacles: {:?}", params);

        let obstacles = self
            .planner
            .list_obstacles(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list obstacles", &e))?;

        text(format!("# Obstacles\n\n{}", ObstacleLines(&obstacles)))
    }

    pub async fn remove_obstacle(&self, Parameters(params): Parameters<ObstacleRef>) -> McpResult {
        debug!("remove_obstacle: {:?}", params);

        let obstacle = self
            .planner
            .remove_obstacle(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to remove obstacle", &e))?;

        text(
            OperationStatus::success(format!("Removed obstacle {}", ObstacleView(&obstacle)))
                .to_string(),
        )
    }

    pub async fn slot_status(&self, Parameters(params): Parameters<SlotQuery>) -> McpResult {
        debug!("slot_status: {:?}", params);

        let query = params.as_ref();
        let day: Day = query
            .day
            .parse()
            .map_err(|e| to_mcp_error("Failed to check slot", &e))?;
        let status = self
            .planner
            .slot_status(query)
            .await
            .map_err(|e| to_mcp_error("Failed to check slot", &e))?;

        text(
            SlotView {
                day,
                hour: query.hour,
                status: &status,
            }
            .to_string(),
        )
    }

    pub async fn weekly_grid(&self, Parameters(params): Parameters<UserScope>) -> McpResult {
        debug!("weekly_grid: {:?}", params);

        let grid = self
            .planner
            .weekly_grid(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to build weekly grid", &e))?;

        text(GridView(&grid).to_string())
    }

    pub async fn reset_obstacles(&self, Parameters(params): Parameters<UserScope>) -> McpResult {
        debug!("reset_obstacles: {:?}", params);

        let removed = self
            .planner
            .reset_obstacles(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to reset obstacles", &e))?;

        text(OperationStatus::success(format!("Removed {removed} obstacle(s)")).to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cram_core::{storage::MemoryStorage, PlannerBuilder};
    use rmcp::model::{ErrorCode, RawContent};

    use super::*;

    async fn handlers() -> McpHandlers {
        let planner = PlannerBuilder::new()
            .with_storage(Arc::new(MemoryStorage::new()))
            .build()
            .await
            .expect("Failed to create planner");
        McpHandlers::new(planner)
    }

    fn params<T: JsonSchema>(inner: T) -> Parameters<McpParams<T>> {
        Parameters(McpParams(inner))
    }

    fn output_text(result: CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_add_and_rank_tasks() {
        let handlers = handlers().await;

        let result = handlers
            .add_task(params(core::AddTask {
                user: "alice".to_string(),
                task: core::NewTask {
                    title: "Math HW".to_string(),
                    subject: "Math".to_string(),
                    deadline: "2099-01-10".to_string(),
                    difficulty: 4,
                    importance: 5,
                    workload: 3,
                },
            }))
            .await
            .unwrap();
        assert!(output_text(result).starts_with("Created task with ID: 1"));

        let result = handlers
            .rank_tasks(params(core::UserScope {
                user: "alice".to_string(),
            }))
            .await
            .unwrap();
        let output = output_text(result);
        assert!(output.contains("**Math HW**"));
        assert!(output.contains("score 17"));
    }

    #[tokio::test]
    async fn test_bad_input_is_invalid_params() {
        let handlers = handlers().await;

        let err = handlers
            .slot_status(params(core::SlotQuery {
                user: "alice".to_string(),
                day: "Funday".to_string(),
                hour: 3,
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

        let err = handlers
            .remove_obstacle(params(core::ObstacleRef {
                user: "alice".to_string(),
                id: 42,
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_obstacles_and_grid() {
        let handlers = handlers().await;

        handlers
            .add_obstacle(params(core::AddObstacle {
                user: "alice".to_string(),
                obstacle: core::NewObstacle {
                    day: "Tue".to_string(),
                    start_hour: 9,
                    end_hour: 12,
                    label: "Class".to_string(),
                },
            }))
            .await
            .unwrap();

        let busy = handlers
            .slot_status(params(core::SlotQuery {
                user: "alice".to_string(),
                day: "Tue".to_string(),
                hour: 9,
            }))
            .await
            .unwrap();
        assert!(output_text(busy).contains("is busy: Class"));

        let free = handlers
            .slot_status(params(core::SlotQuery {
                user: "alice".to_string(),
                day: "Tue".to_string(),
                hour: 12,
            }))
            .await
            .unwrap();
        assert!(output_text(free).contains("Tue 12:00 is free"));

        let grid = handlers
            .weekly_grid(params(core::UserScope {
                user: "alice".to_string(),
            }))
            .await
            .unwrap();
        assert!(output_text(grid).contains("165h free this week"));
    }
}
