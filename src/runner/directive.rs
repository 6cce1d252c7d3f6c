//! Line classification and dispatch
//!
//! A trimmed line is matched against an ordered table of rules; the first rule
//! that recognises the line decides its effect. Lines nothing recognises run
//! as plain commands when replayed from a task and are rejected at top level.

use crate::runner::{execute_command, Context, Event, Verbosity};
use std::path::PathBuf;

/// Whether processing should go on after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// `STOP` was reached; nothing else may run
    Halt,
}

impl Flow {
    pub fn is_halt(self) -> bool {
        self == Flow::Halt
    }
}

/// Where a line is being dispatched from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    TopLevel,
    Task,
}

/// A classified line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `$name=value`; `name` may be empty, in which case nothing is stored
    Assign { name: &'a str, value: &'a str },
    /// `$...` without `=`
    Command(&'a str),
    /// `PRINT ="text"`, already unquoted
    Print(&'a str),
    /// `OUT: path`, not yet substituted
    OutputCheck(&'a str),
    Stop,
    /// Anything else
    Other(&'a str),
}

type Rule = for<'a> fn(&'a str) -> Option<Directive<'a>>;

/// Recognisers in precedence order
const RULES: &[Rule] = &[assignment, substituted_command, print, output_check, stop];

fn assignment(line: &str) -> Option<Directive<'_>> {
    let rest = line.strip_prefix('$')?;
    let (name, value) = rest.split_once('=')?;
    Some(Directive::Assign {
        name: name.trim(),
        value: value.trim(),
    })
}

fn substituted_command(line: &str) -> Option<Directive<'_>> {
    (line.starts_with('$') && !line.contains('=')).then_some(Directive::Command(line))
}

fn print(line: &str) -> Option<Directive<'_>> {
    let text = line.strip_prefix("PRINT =")?;
    Some(Directive::Print(text.trim().trim_matches('"')))
}

fn output_check(line: &str) -> Option<Directive<'_>> {
    let path = line.strip_prefix("OUT:")?;
    Some(Directive::OutputCheck(path.trim()))
}

fn stop(line: &str) -> Option<Directive<'_>> {
    (line == "STOP").then_some(Directive::Stop)
}

impl<'a> Directive<'a> {
    /// Classify one trimmed line
    pub fn classify(line: &'a str) -> Directive<'a> {
        RULES
            .iter()
            .find_map(|rule| rule(line))
            .unwrap_or(Directive::Other(line))
    }
}

/// Classify and execute one line
pub fn dispatch_line(line: &str, origin: Origin, ctx: &mut Context) -> Flow {
    let line = line.trim();

    match Directive::classify(line) {
        Directive::Assign { name, value } => {
            if !name.is_empty() {
                ctx.vars.set(name, value);
                ctx.emit(Event::VariableSet {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Directive::Command(text) => {
            let substituted = ctx.vars.substitute(text);
            // The leading `$` marks a command; drop it if substitution left it
            let cmd = substituted.strip_prefix('$').unwrap_or(substituted.as_str());
            run_command(cmd, ctx);
        }
        Directive::Print(text) => ctx.emit(Event::Print(text.to_string())),
        Directive::OutputCheck(path) => check_output(path, ctx),
        Directive::Stop => {
            ctx.emit(Event::Stopped);
            return Flow::Halt;
        }
        Directive::Other(text) => match origin {
            Origin::Task => {
                let cmd = ctx.vars.substitute(text);
                run_command(&cmd, ctx);
            }
            Origin::TopLevel => ctx.emit(Event::UnknownCommand(text.to_string())),
        },
    }

    Flow::Continue
}

/// Echo and execute a substituted command
fn run_command(cmd: &str, ctx: &mut Context) {
    if ctx.verbosity >= Verbosity::Verbose {
        for name in ctx.vars.unresolved(cmd) {
            ctx.emit(Event::Unresolved(name));
        }
    }
    ctx.emit(Event::Run(cmd.to_string()));
    execute_command(cmd, ctx);
}

/// Report whether an output target exists, trying the executable suffix
fn check_output(path: &str, ctx: &mut Context) {
    let target = ctx.vars.substitute(path);
    match resolve_output(&target, ctx) {
        Some(found) => ctx.emit(Event::OutputFound(found)),
        None => ctx.emit(Event::OutputMissing(target)),
    }
}

/// The existing output path, as written or with the platform suffix
pub fn resolve_output(target: &str, ctx: &Context) -> Option<String> {
    let exists = |p: &str| -> bool {
        let path: PathBuf = ctx.resolve(p);
        path.exists()
    };

    if exists(target) {
        return Some(target.to_string());
    }

    let suffixed = format!("{}{}", target, ctx.platform.exe_suffix()?);
    exists(&suffixed).then_some(suffixed)
}
