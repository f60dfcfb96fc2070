use std::io::BufRead;

use crate::ops::page::Action;

/// Error type for reading a replay script
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    BadLine {
        line: usize,
        source: serde_json::Error,
    },
}

/// Parse a JSON Lines action script. Blank lines and `#` comments are skipped.
/// Line numbers in errors are 1-based.
pub fn read_actions<R: BufRead>(reader: R) -> Result<Vec<Action>, ReplayError> {
    let mut actions = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let action = serde_json::from_str(trimmed).map_err(|e| ReplayError::BadLine {
            line: i + 1,
            source: e,
        })?;
        actions.push(action);
    }
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::episode::DraftField;

    #[test]
    fn test_read_actions_skips_blanks_and_comments() {
        let script = "\
# record one episode
{\"action\":\"update_draft\",\"field\":\"description\",\"value\":\"Drifted\"}

{\"action\":\"toggle_trigger\",\"name\":\"Boredom\"}
{\"action\":\"commit_episode\"}
";
        let actions = read_actions(script.as_bytes()).unwrap();
        assert_eq!(actions.len(), 3);
        assert_eq!(
            actions[0],
            Action::UpdateDraft {
                field: DraftField::Description,
                value: "Drifted".into()
            }
        );
        assert_eq!(actions[2], Action::CommitEpisode);
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let script = "{\"action\":\"commit_episode\"}\n\n{\"action\":\"fly\"}\n";
        let err = read_actions(script.as_bytes()).unwrap_err();
        match err {
            ReplayError::BadLine { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {}", other),
        }
    }
}
