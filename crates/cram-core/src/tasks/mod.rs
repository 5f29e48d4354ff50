//! The task prioritization engine.
//!
//! - [`store`]: per-user task lists ([`TaskStore`])
//! - [`priority`]: scoring and ranking ([`PriorityEngine`])
//! - [`retention`]: grace-window eviction ([`RetentionPolicy`])
//! - [`daily`]: greedy daily plan over the ranking

pub mod daily;
pub mod priority;
pub mod retention;
pub mod store;


pub use daily::{plan_day, MAX_DAILY_HOURS};
pub use priority::{PriorityEngine, DEFAULT_URGENCY_HORIZON};
pub use retention::RetentionPolicy;
pub use store::{parse_deadline, TaskStore};
