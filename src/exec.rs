//! Shared git subprocess execution
//!
//! Every query goes through one primitive: run `git` with a fixed
//! argument list, block until it exits, and hand back trimmed stdout.

use std::path::Path;
use std::process::Command;

use log::debug;

/// Run `git` with the given arguments and return its trimmed stdout.
///
/// `cwd` overrides the working directory git runs in; `None` means the
/// current process's working directory. Spawn failures and non-zero
/// exits both map to `Err` with a human-readable message (non-zero
/// exits include the status code and trimmed stderr).
///
/// No timeout is imposed here; callers needing one must wrap this.
pub fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<String, String> {
    debug!(
        "running `git {}` in {}",
        args.join(" "),
        cwd.map(|p| p.display().to_string()).unwrap_or_else(|| "process cwd".to_string())
    );

    let mut command = Command::new("git");
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output =
        command.output().map_err(|e| format!("failed to spawn `git {}`: {}", args.join(" "), e))?;

    if !output.status.success() {
        let status =
            output.status.code().map(|c| c.to_string()).unwrap_or_else(|| "signal".to_string());
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!(
            "`git {}` exited with status {}: {}",
            args.join(" "),
            status,
            stderr.trim()
        ));
    }

    // Git output is not guaranteed UTF-8 (paths, refs); decode lossily
    // rather than failing the whole query.
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
#[path = "exec_test.rs"]
mod exec_test;
