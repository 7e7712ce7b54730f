use std::path::Path;
use std::process::Command;

/// Fixed build entry point, resolved relative to the working directory.
/// Launched through the host interpreter, so the same name works whether
/// the file holds batch or shell commands.
pub const BUILD_SCRIPT: &str = "build.bat";

/// The result of executing the build script.
///
/// `stderr` is captured so interpreter diagnostics never leak into the
/// reprinted stream, but filtering only ever looks at `stdout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Extract an exit code from a process status, mapping signals to 128+N on Unix.
fn exit_code_from_status(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        status
            .code()
            .unwrap_or_else(|| status.signal().map_or(1, |s| 128 + s))
    }
    #[cfg(not(unix))]
    {
        status.code().unwrap_or(1)
    }
}

/// Host interpreter invocation for `script`: `cmd /C` on Windows, `sh`
/// elsewhere.
fn interpreter(script: &Path) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(script);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg(script);
        cmd
    }
}

/// Run the fixed build script in the current directory.
///
/// # Errors
///
/// Returns an error if the host interpreter fails to spawn. A missing or
/// failing script is not an error here; the interpreter still runs and the
/// failure shows up as a non-zero `exit_code`.
pub fn run_build() -> anyhow::Result<CommandResult> {
    run_script(Path::new(BUILD_SCRIPT))
}

/// Run `script` through the host interpreter, blocking until it exits,
/// with both output streams captured in memory and decoded as text.
///
/// # Errors
///
/// Returns an error if the interpreter process fails to spawn.
pub fn run_script(script: &Path) -> anyhow::Result<CommandResult> {
    let output = interpreter(script).output()?;

    Ok(CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: exit_code_from_status(output.status),
    })
}
