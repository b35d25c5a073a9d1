use crate::app::error::Error;
use crate::app::record::MintLog;
use std::fs;
use std::path::Path;

/// Reads the whole log file and parses it line by line. Only a missing or
/// unreadable file is fatal; individual lines never are.
pub fn parse_file(path: &Path) -> Result<Vec<MintLog>, Error> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Parses newline-delimited mint log entries. Blank lines are skipped
/// silently; anything before the first '{' on a line is discarded; lines
/// that still fail to decode are logged and skipped.
pub fn parse_lines(content: &str) -> Vec<MintLog> {
    let mut logs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let json = match line.find('{') {
            Some(position) => &line[position..],
            None => line,
        };

        match serde_json::from_str::<MintLog>(json) {
            Ok(mut log) => {
                log.split_name();
                logs.push(log);
            }
            Err(e) => error!("Cannot parse log line '{}' cause: {}", line, e),
        }
    }
    logs
}
