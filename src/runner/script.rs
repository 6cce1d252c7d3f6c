//! Script parsing
//!
//! Lines outside any task are dispatched as they are read. A `task <name>:`
//! header opens a block and every later line is buffered into it; there is no
//! closing syntax, so only another header changes the target block.

use crate::runner::{dispatch_line, Context, Flow, Origin};
use regex::Regex;
use std::sync::OnceLock;

/// Parser position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    TopLevel,
    InsideTask(String),
}

/// Task name from a `task <name>:` header line
pub fn task_header(line: &str) -> Option<&str> {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    let re = HEADER.get_or_init(|| Regex::new(r"^task\s+(\S.*?)\s*:$").expect("valid header regex"));

    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Names of every task a script declares, sorted, without running anything
pub fn declared_tasks(content: &str) -> Vec<String> {
    let mut names: Vec<String> = content
        .lines()
        .filter_map(|line| task_header(line.trim()))
        .map(str::to_string)
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Parse a script, running top-level directives and registering tasks
///
/// Returns `Flow::Halt` if a top-level `STOP` was reached; the remaining
/// lines are not read.
pub fn parse_script(content: &str, ctx: &mut Context) -> Flow {
    let mut block = Block::TopLevel;

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = task_header(line) {
            ctx.tasks.declare(name);
            block = Block::InsideTask(name.to_string());
            continue;
        }

        match &block {
            Block::InsideTask(name) => ctx.tasks.append(name, line),
            Block::TopLevel => {
                if dispatch_line(line, Origin::TopLevel, ctx).is_halt() {
                    return Flow::Halt;
                }
            }
        }
    }

    Flow::Continue
}
