//! Main CLI application

use crate::config::{find_script_file, load_env_file, load_settings, read_script, Settings};
use crate::error::{ConfigError, ConfigResult};
use crate::runner::{declared_tasks, parse_script, run_task, Context, VariableStore, Verbosity};
use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("gmake")
        .version(crate::VERSION)
        .about("Run tasks from a gMake build script")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to the gMake script (default: search for gMake upwards)"),
        )
        .arg(
            Arg::new("define")
                .short('D')
                .long("set")
                .value_name("NAME=VALUE")
                .action(ArgAction::Append)
                .help("Set a variable before the script is parsed"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List the tasks declared by the script")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .value_parser(value_parser!(Shell))
                .help("Print a shell completion script"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tasks")
                .value_name("TASK")
                .num_args(1..)
                .help("Tasks to run, in order"),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Parse a `NAME=VALUE` definition
fn parse_define(define: &str) -> ConfigResult<(String, String)> {
    match define.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ConfigError::InvalidVariable(define.to_string())),
    }
}

/// Initial variables: settings first, then command-line definitions
fn initial_vars(settings: &Settings, matches: &ArgMatches) -> ConfigResult<VariableStore> {
    let mut vars = VariableStore::new();
    for (name, value) in &settings.vars {
        vars.set(name.clone(), value.clone());
    }
    if let Some(defines) = matches.get_many::<String>("define") {
        for define in defines {
            let (name, value) = parse_define(define)?;
            vars.set(name, value);
        }
    }
    Ok(vars)
}

/// Run with already-parsed arguments
pub fn run_with_matches(matches: &ArgMatches) -> anyhow::Result<()> {
    if let Some(shell) = matches.get_one::<Shell>("completions").copied() {
        let mut cmd = build_command();
        generate(shell, &mut cmd, "gmake", &mut io::stdout());
        return Ok(());
    }

    let script_path = match matches.get_one::<PathBuf>("file") {
        Some(path) => path.clone(),
        None => find_script_file()?,
    };
    let content = read_script(&script_path)?;

    if matches.get_flag("list") {
        for name in declared_tasks(&content) {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut ctx = Context::new()
        .with_script_path(script_path.clone())
        .with_verbosity(get_verbosity(matches));

    let dir = ctx.script_dir();
    let settings = load_settings(&dir)
        .with_context(|| format!("Failed to load settings for {}", script_path.display()))?;
    load_env_file(&settings.env_file_path(&dir))?;

    ctx.vars = initial_vars(&settings, matches)?;

    if let Some(interpreter) = settings.interpreter {
        ctx = ctx.with_interpreter(interpreter);
    }

    if parse_script(&content, &mut ctx).is_halt() {
        return Ok(());
    }

    if let Some(tasks) = matches.get_many::<String>("tasks") {
        for name in tasks {
            if run_task(name, &mut ctx).is_halt() {
                break;
            }
        }
    }

    Ok(())
}

/// Run the CLI application with the process arguments
pub fn run() -> anyhow::Result<()> {
    let matches = build_command().get_matches();
    run_with_matches(&matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_verbosity_normal() {
        let matches = build_command().get_matches_from(vec!["gmake"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Normal);
    }

    #[test]
    fn test_get_verbosity_silent_wins() {
        let matches = build_command().get_matches_from(vec!["gmake", "-s", "-v"]);
        assert_eq!(get_verbosity(&matches), Verbosity::Silent);
    }

    #[test]
    fn test_tasks_positional() {
        let matches = build_command().get_matches_from(vec!["gmake", "-f", "x", "build", "test"]);
        let tasks: Vec<&String> = matches.get_many::<String>("tasks").unwrap().collect();
        assert_eq!(tasks, vec!["build", "test"]);
        assert_eq!(
            matches.get_one::<PathBuf>("file"),
            Some(&PathBuf::from("x"))
        );
    }

    #[test]
    fn test_parse_define() {
        assert_eq!(
            parse_define("OUT=bin/app").unwrap(),
            ("OUT".to_string(), "bin/app".to_string())
        );
        assert_eq!(
            parse_define("FLAGS=-X a=b").unwrap(),
            ("FLAGS".to_string(), "-X a=b".to_string())
        );
        assert!(matches!(
            parse_define("novalue"),
            Err(ConfigError::InvalidVariable(_))
        ));
        assert!(parse_define("=x").is_err());
    }

    #[test]
    fn test_defines_override_settings() {
        let mut settings = Settings::default();
        settings.vars.insert("MODE".to_string(), "debug".to_string());
        settings.vars.insert("OUT".to_string(), "bin".to_string());

        let matches = build_command().get_matches_from(vec!["gmake", "-D", "MODE=release"]);
        let vars = initial_vars(&settings, &matches).unwrap();

        assert_eq!(vars.get("MODE"), Some("release"));
        assert_eq!(vars.get("OUT"), Some("bin"));
    }
}
