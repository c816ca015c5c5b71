// Issue fetching via the external bd CLI

use crate::engine::types::{Issue, RawIssue, StatusGroups, partition_by_status};
use std::process::Command;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {code}: {stderr}")]
    Failed {
        command: String,
        code: String,
        stderr: String,
    },

    #[error("failed to parse {command} output: {source}")]
    Parse {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Fetch raw issue records for one status.
///
/// Runs `<command> list --json --status=<status>` with a fixed argument
/// vector, no shell involved.
pub fn fetch_status(command: &str, status: &str) -> Result<Vec<RawIssue>, SourceError> {
    let output = Command::new(command)
        .args(["list", "--json", &format!("--status={}", status)])
        .output()
        .map_err(|e| SourceError::Spawn {
            command: command.to_string(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(SourceError::Failed {
            command: command.to_string(),
            code: output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string()),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    serde_json::from_slice(&output.stdout).map_err(|e| SourceError::Parse {
        command: command.to_string(),
        source: e,
    })
}

/// Like `fetch_status`, but a failure degrades to an empty list so one bad
/// status never takes the board down. The failure is logged and otherwise
/// shows up as an empty section.
fn fetch_status_or_empty(command: &str, status: &str) -> Vec<RawIssue> {
    match fetch_status(command, status) {
        Ok(records) => {
            debug!(status, count = records.len(), "fetched issues");
            records
        }
        Err(e) => {
            warn!(status, error = %e, "issue fetch failed, showing empty section");
            Vec::new()
        }
    }
}

/// Fetch all board issues and partition them into the three columns.
///
/// Open and blocked issues share the first column; the partition applies the
/// closed cap.
pub fn fetch_grouped(command: &str) -> StatusGroups {
    let mut raw = Vec::new();
    raw.extend(fetch_status_or_empty(command, "open"));
    raw.extend(fetch_status_or_empty(command, "blocked"));
    raw.extend(fetch_status_or_empty(command, "in_progress"));
    raw.extend(fetch_status_or_empty(command, "closed"));

    let issues: Vec<Issue> = raw.into_iter().map(Issue::from).collect();
    partition_by_status(issues)
}

/// Probe the tracker binary for `check-bd`.
pub fn bd_version(command: &str) -> Result<String, SourceError> {
    let output = Command::new(command)
        .arg("--version")
        .output()
        .map_err(|e| SourceError::Spawn {
            command: command.to_string(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(SourceError::Failed {
            command: command.to_string(),
            code: output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string()),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let err = fetch_status("bdash-no-such-binary", "open").unwrap_err();
        assert!(matches!(err, SourceError::Spawn { .. }));
    }

    #[test]
    fn records_parse_from_json_array() {
        let json = r#"[
            {"id":"x-1","title":"First","status":"open","priority":1,
             "issue_type":"task","dependency_count":0,"dependencies":[]},
            {"id":"x-2","title":"Second","status":"open","priority":0,
             "issue_type":"feature","dependency_count":1,
             "dependencies":[{"depends_on_id":"x-1"}]}
        ]"#;

        let records: Vec<RawIssue> = serde_json::from_str(json).expect("array should parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].dependencies[0].depends_on_id, "x-1");
    }
}
