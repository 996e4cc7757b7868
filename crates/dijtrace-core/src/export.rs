//! Trace log export
//!
//! Writes the step trace as a plain-text log, one line per step, for
//! archiving or diffing runs outside the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;
use crate::trace::Step;

/// Write the step log to `path`, creating parent directories as needed.
///
/// Layout: the caller's header line, an export timestamp, an 80-dash rule,
/// then one `[NNN] action: detail` line per step. Returns the written path.
pub fn export_steps(path: &Path, header: &str, steps: &[Step]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut lines = Vec::with_capacity(steps.len() + 3);
    lines.push(header.to_string());
    lines.push(format!(
        "Exported: {}",
        Local::now().format("%Y-%m-%dT%H:%M:%S")
    ));
    lines.push("-".repeat(80));
    for step in steps {
        lines.push(format!("[{:03}] {}: {}", step.seq, step.action, step.detail));
    }

    fs::write(path, lines.join("\n"))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Action;
    use tempfile::tempdir;

    fn sample_steps() -> Vec<Step> {
        vec![
            Step {
                seq: 1,
                action: Action::Init,
                detail: "start node s=0".to_string(),
                visited: vec![false],
                dist: vec![0.0],
                parent: vec![None],
                current: Some(0),
            },
            Step {
                seq: 2,
                action: Action::Done,
                detail: "queue empty, run finished".to_string(),
                visited: vec![true],
                dist: vec![0.0],
                parent: vec![None],
                current: None,
            },
        ]
    }

    #[test]
    fn test_export_writes_header_and_step_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.log");
        let written = export_steps(&path, "run: source=0 nodes=1", &sample_steps()).unwrap();
        assert_eq!(written, path);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "run: source=0 nodes=1");
        assert!(lines[1].starts_with("Exported: "));
        assert_eq!(lines[2], "-".repeat(80));
        assert_eq!(lines[3], "[001] init: start node s=0");
        assert_eq!(lines[4], "[002] done: queue empty, run finished");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_export_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("nested").join("trace.log");
        export_steps(&path, "header", &sample_steps()).unwrap();
        assert!(path.exists());
    }
}
