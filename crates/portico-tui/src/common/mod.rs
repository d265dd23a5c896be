//! Shared building blocks for the TUI (task lifecycle).

mod task;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
