//! Command execution
//!
//! Commands normally go through the host shell. Two shapes are handled here
//! first: a `go build ... -o <path>` gets the output directory created, and
//! `rm -rf <path>` is carried out directly without a shell.

use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::{Context, Event};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, ExitStatus, Stdio};

/// Tokens that mark a build invocation with an output path
const BUILD_TOKEN: &str = "go build";
const OUTPUT_FLAG: &str = "-o";

/// Leading fields of a forced recursive delete
const REMOVE_PREFIX: [&str; 2] = ["rm", "-rf"];

/// Result of a shell invocation
#[derive(Debug)]
pub struct ShellOutput {
    /// Standard output and standard error, interleaved as written
    pub text: String,
    pub status: ExitStatus,
}

/// Execute an already-substituted command, reporting through the context
///
/// Failures are reported and never stop the run.
pub fn execute_command(cmd: &str, ctx: &mut Context) {
    let cmd = cmd.trim();
    if cmd.is_empty() {
        return;
    }

    if is_build_with_output(cmd) {
        for path in output_paths(cmd) {
            let target = ctx.resolve(path);
            match ensure_parent_dir(&target) {
                Ok(Some(dir)) => ctx.emit(Event::DirectoryCreated(dir.display().to_string())),
                Ok(None) => {}
                Err(e) => ctx.emit(Event::Failed(e.to_string())),
            }
        }
    }

    let fields: Vec<&str> = cmd.split_whitespace().collect();
    if fields.len() >= 2 && fields[..2] == REMOVE_PREFIX {
        if let Some(target) = fields.get(2) {
            let target = ctx.vars.substitute(target);
            match remove_all(&ctx.resolve(&target)) {
                Ok(()) => ctx.emit(Event::Deleted(target)),
                Err(e) => ctx.emit(Event::Failed(e.to_string())),
            }
        }
        return;
    }

    match run_shell(cmd, ctx) {
        Ok(output) => {
            let text = output.text.trim_end_matches(['\r', '\n']);
            if !text.is_empty() {
                ctx.emit(Event::Output(text.to_string()));
            }
            if !output.status.success() {
                let err = ExecutionError::CommandFailed(output.status.code());
                ctx.emit(Event::Failed(err.to_string()));
            }
        }
        Err(e) => ctx.emit(Event::Failed(e.to_string())),
    }
}

/// Run a command through the context's shell, capturing its output
pub fn run_shell(cmd: &str, ctx: &Context) -> ExecutionResult<ShellOutput> {
    let (program, args) = ctx
        .interpreter
        .split_first()
        .ok_or_else(|| ExecutionError::Launch {
            command: cmd.to_string(),
            error: "no interpreter configured".to_string(),
        })?;

    let launch_error = |e: io::Error| ExecutionError::Launch {
        command: cmd.to_string(),
        error: e.to_string(),
    };

    // Both streams share one pipe so the text keeps the order it was written in
    let (mut reader, writer) = io::pipe().map_err(launch_error)?;
    let mut child = StdCommand::new(program)
        .args(args)
        .arg(cmd)
        .current_dir(&ctx.working_dir)
        .stdin(Stdio::null())
        .stdout(writer.try_clone().map_err(launch_error)?)
        .stderr(writer)
        .spawn()
        .map_err(launch_error)?;

    // The builder and its pipe handles are gone; reading ends when the child exits
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).map_err(launch_error)?;
    let status = child.wait().map_err(launch_error)?;

    Ok(ShellOutput {
        text: String::from_utf8_lossy(&raw).into_owned(),
        status,
    })
}

fn is_build_with_output(cmd: &str) -> bool {
    cmd.contains(BUILD_TOKEN) && cmd.contains(OUTPUT_FLAG)
}

/// Every path that directly follows an output flag
fn output_paths(cmd: &str) -> Vec<&str> {
    let fields: Vec<&str> = cmd.split_whitespace().collect();
    fields
        .windows(2)
        .filter(|pair| pair[0] == OUTPUT_FLAG)
        .map(|pair| pair[1])
        .collect()
}

/// Create the parent directory of `path` if missing; returns it when created
fn ensure_parent_dir(path: &Path) -> ExecutionResult<Option<PathBuf>> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Ok(None),
    };
    if dir.exists() {
        return Ok(None);
    }

    fs::create_dir_all(dir).map_err(|e| ExecutionError::CreateDir {
        path: dir.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(Some(dir.to_path_buf()))
}

/// Delete a file or directory tree; a missing path is not an error
fn remove_all(path: &Path) -> ExecutionResult<()> {
    let result = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    };

    result.map_err(|e| ExecutionError::Delete {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
