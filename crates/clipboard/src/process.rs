//! Blocking wrappers around the external programs the managers are driven through.

use clipdeck_core::ClipdeckError;
use std::borrow::Cow;
use std::io::{ErrorKind, Write};
use std::process::{Command, Output, Stdio};
use std::thread;

fn describe(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes command output. Invalid UTF-8 becomes U+FFFD, which would then be
/// written back verbatim if that entry is selected, so it is logged.
fn decode(command: &str, bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            tracing::debug!("`{}` printed invalid UTF-8, replaced with U+FFFD", command);
            text
        }
    }
}

fn check(command: String, output: Output) -> Result<String, ClipdeckError> {
    if output.status.success() {
        return Ok(decode(&command, &output.stdout));
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let reason = match stderr.trim() {
        "" => output.status.to_string(),
        msg => format!("{}: {}", output.status, msg),
    };
    Err(ClipdeckError::Process { command, reason })
}

/// Runs `program` to completion and returns its stdout.
pub fn output(program: &str, args: &[&str]) -> Result<String, ClipdeckError> {
    let command = describe(program, args);
    tracing::debug!("Running `{}`", command);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ClipdeckError::Process {
            command: command.clone(),
            reason: e.to_string(),
        })?;

    check(command, output)
}

/// Runs `program` with `input` written to its stdin.
pub fn output_with_stdin(program: &str, args: &[&str], input: &str) -> Result<String, ClipdeckError> {
    let command = describe(program, args);
    tracing::debug!("Running `{}` with {} bytes on stdin", command, input.len());

    let spawn_err = |e: std::io::Error| ClipdeckError::Process {
        command: command.clone(),
        reason: e.to_string(),
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_err)?;

    // Fed from a thread so a child that fills stdout before draining stdin cannot block us.
    let feeder = child.stdin.take().map(|mut stdin| {
        let input = input.to_string();
        thread::spawn(move || stdin.write_all(input.as_bytes()))
    });

    let output = child.wait_with_output().map_err(spawn_err)?;

    // A child may exit without reading all of its input.
    if let Some(Ok(Err(e))) = feeder.map(thread::JoinHandle::join) {
        if e.kind() != ErrorKind::BrokenPipe {
            return Err(spawn_err(e));
        }
    }

    check(command, output)
}

/// True when `program` runs and exits zero.
pub fn succeeds(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Starts `program` and returns without waiting on it.
pub fn spawn_detached(program: &str, args: &[&str]) -> Result<(), ClipdeckError> {
    let command = describe(program, args);
    tracing::debug!("Spawning `{}`", command);

    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|mut child| {
            // Reap in the background so the child never lingers as a zombie.
            std::thread::spawn(move || {
                let _ = child.wait();
            });
        })
        .map_err(|e| ClipdeckError::Process {
            command,
            reason: e.to_string(),
        })
}

pub fn is_installed(program: &str) -> bool {
    which::which(program).is_ok()
}

/// Checks for a running process with `pgrep`. `full` matches against the whole command line.
pub fn process_running(pattern: &str, full: bool) -> bool {
    let flag = if full { "-f" } else { "-x" };
    succeeds("pgrep", &[flag, pattern])
}

/// Splits NUL-delimited command output, dropping the empty tail.
pub fn split_nul(raw: &str) -> Vec<String> {
    let mut items: Vec<String> = raw.split('\0').map(str::to_string).collect();
    while items.last().is_some_and(|item| item.is_empty()) {
        items.pop();
    }
    items
}
