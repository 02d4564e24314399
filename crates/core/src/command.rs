use anyhow::Result;
use std::path::Path;
use std::process::Stdio;

fn shell(command: &str, working_dir: &Path, envs: &[(&str, &str)]) -> tokio::process::Command {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = tokio::process::Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = tokio::process::Command::new("sh");
        c.arg("-c").arg(command);
        c
    };
    cmd.current_dir(working_dir);
    cmd.envs(envs.iter().copied());
    cmd
}

/// Execute a shell command in the given directory, capturing its output
///
/// # Errors
/// Returns error if the command cannot be spawned or exits unsuccessfully.
pub async fn run_command(command: &str, working_dir: &Path, envs: &[(&str, &str)]) -> Result<()> {
    tracing::debug!(command, dir = %working_dir.display(), "running command");
    let output = shell(command, working_dir, envs).output().await?;
    if !output.status.success() {
        anyhow::bail!(
            "Command `{}` failed: {}",
            command,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}

/// Execute a shell command attached to the current terminal
///
/// # Errors
/// Returns error if the command cannot be spawned or exits unsuccessfully.
pub async fn run_interactive(command: &str, working_dir: &Path) -> Result<()> {
    tracing::debug!(command, dir = %working_dir.display(), "running interactive command");
    let status = shell(command, working_dir, &[])
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await?;
    if !status.success() {
        anyhow::bail!("Command `{command}` exited with {status}");
    }
    Ok(())
}
