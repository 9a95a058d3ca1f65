//! Opening a rendered image in the platform's default viewer.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::error::{ChartError, Result};

/// Build the command that opens `path` and waits for the viewer.
///
/// `open -W` and `start /WAIT` block until the viewer exits; `xdg-open`
/// returns when its handler does.
#[must_use]
pub fn viewer_command(path: &Path) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        command.arg("-W").arg(path);
        command
    }
    #[cfg(target_os = "windows")]
    {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", "/WAIT"]).arg(path);
        command
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

/// Open `path` in the default viewer and block until it exits.
///
/// # Errors
/// Returns `FileRead` if the image does not exist, or `Io` if the viewer
/// cannot be started or exits unsuccessfully.
pub fn show(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(ChartError::FileRead {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "image not found"),
        });
    }

    let mut command = viewer_command(path);
    let program = command.get_program().to_string_lossy().into_owned();
    let status = command.status().map_err(|err| {
        ChartError::Io(io::Error::new(
            err.kind(),
            format!("failed to launch viewer '{program}': {err}"),
        ))
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(ChartError::Io(io::Error::other(format!(
            "viewer '{program}' exited with {status}"
        ))))
    }
}
