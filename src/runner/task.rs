//! Task registry and task replay
//!
//! A task body is stored exactly as written. Substitution happens on each
//! replay, so variables hold whatever values they have when the task runs.

use crate::runner::{dispatch_line, Context, Event, Flow, Origin};
use std::collections::HashMap;

/// A named, ordered group of raw lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    /// Task name
    pub name: String,

    /// Unsubstituted lines in source order
    pub lines: Vec<String>,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Task {
            name: name.into(),
            lines: Vec::new(),
        }
    }
}

/// All tasks declared by a script
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: HashMap<String, Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a task, truncating any body it already had
    pub fn declare(&mut self, name: &str) {
        self.tasks.insert(name.to_string(), Task::new(name));
    }

    /// Append a raw line to a declared task
    pub fn append(&mut self, name: &str, line: &str) {
        if let Some(task) = self.tasks.get_mut(name) {
            task.lines.push(line.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Task names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tasks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Replay a task's lines through the dispatcher
///
/// A missing task is reported and is not an error. Returns `Flow::Halt` as
/// soon as a replayed line stops execution.
pub fn run_task(name: &str, ctx: &mut Context) -> Flow {
    let lines = match ctx.tasks.get(name) {
        Some(task) => task.lines.clone(),
        None => {
            ctx.emit(Event::TaskNotFound(name.to_string()));
            return Flow::Continue;
        }
    };

    ctx.emit(Event::TaskStart(name.to_string()));

    for line in &lines {
        if dispatch_line(line, Origin::Task, ctx).is_halt() {
            return Flow::Halt;
        }
    }

    Flow::Continue
}
