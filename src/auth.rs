use std::process::Command;

use crate::config::Config;
use crate::error::FolderCountError;

/// Picks the bearer credential: the literal `api_key`, else the output of
/// `api_key_command`, else an empty key.
pub async fn resolve_api_key(config: &Config) -> Result<String, FolderCountError> {
    if let Some(key) = &config.api_key {
        return Ok(key.trim().to_string());
    }
    match &config.api_key_command {
        Some(command) => run_key_command(command),
        None => {
            tracing::warn!("no api_key configured, requests will be unauthenticated");
            Ok(String::new())
        }
    }
}

fn run_key_command(command: &str) -> Result<String, FolderCountError> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .output()
        .map_err(|e| FolderCountError::Auth(format!("failed to run api_key_command: {e}")))?;
    if !output.status.success() {
        return Err(FolderCountError::Auth(format!(
            "api_key_command failed: {:?}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }
    let key = String::from_utf8(output.stdout)
        .map_err(|e| FolderCountError::Auth(format!("failed to parse api_key_command output: {e}")))?
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| FolderCountError::Auth("no output from api_key_command".to_string()))?
        .to_string();
    Ok(key)
}
