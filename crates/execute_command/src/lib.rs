// crates/execute_command/src/lib.rs

use anyhow::{anyhow, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use status_report::{print_error, print_status};

/// Captured result of an external process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, or -1 when the process was terminated by a signal.
    pub status: i32,
}

impl CommandOutput {
    /// A command succeeded if and only if it exited with code zero.
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Renders a program and its arguments as a single line for messages.
pub fn display_command(program: &str, args: &[impl AsRef<OsStr>]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }
    line
}

/// Runs `program` with `args`, optionally inside `cwd`, capturing both output streams.
///
/// Arguments are passed to the process as-is, so paths need not be UTF-8.
/// In verbose mode the captured stdout is echoed as a status line, and the
/// captured stderr is echoed as an error line when the command failed.
///
/// # Errors
///
/// Returns an error only when the process could not be started. A process
/// that ran and exited non-zero is reported through `CommandOutput::status`.
pub fn run(program: &str, args: &[impl AsRef<OsStr>], cwd: Option<&Path>, verbose: bool) -> Result<CommandOutput> {
    let command_line = display_command(program, args);
    match cwd {
        Some(dir) => log::debug!("running `{}` in {}", command_line, dir.display()),
        None => log::debug!("running `{}`", command_line),
    }

    let mut process = Command::new(program);
    process.args(args).stdin(Stdio::null());
    if let Some(dir) = cwd {
        process.current_dir(dir);
    }

    let output = process
        .output()
        .map_err(|err| anyhow!("could not execute {}: {}", command_line, err))?;

    let result = CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        status: output.status.code().unwrap_or(-1),
    };
    log::debug!("`{}` exited with {}", command_line, result.status);

    if !result.success() && verbose {
        print_error(result.stderr.trim_end());
    }
    print_status(result.stdout.trim_end(), verbose);

    Ok(result)
}

/// Returns true only when the command could be started and exited with code zero.
/// A failure to start the command is reported on stderr.
pub fn executed_successfully(program: &str, args: &[impl AsRef<OsStr>], cwd: Option<&Path>, verbose: bool) -> bool {
    match run(program, args, cwd, verbose) {
        Ok(output) => output.success(),
        Err(err) => {
            print_error(&err.to_string());
            false
        }
    }
}
