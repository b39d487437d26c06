//! Result rendering: plain text for humans, JSON for scripts.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use serde::Serialize;

use utsushi_vfs::{CommandOutput, FileStat, GrepMatch};

/// Writes operation results to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    fn emit_json(&self, value: &impl Serialize) -> Result<()> {
        let mut out = io::stdout().lock();
        serde_json::to_writer_pretty(&mut out, value)?;
        writeln!(out)?;
        Ok(())
    }

    pub fn paths(&self, paths: &[String]) -> Result<()> {
        if self.json {
            return self.emit_json(&paths);
        }
        let mut out = io::stdout().lock();
        for path in paths {
            writeln!(out, "{path}")?;
        }
        Ok(())
    }

    pub fn matches(&self, matches: &[GrepMatch]) -> Result<()> {
        if self.json {
            return self.emit_json(&matches);
        }
        let mut out = io::stdout().lock();
        if matches.is_empty() {
            writeln!(out, "No matches found.")?;
            return Ok(());
        }
        for m in matches {
            match &m.context {
                Some(context) => {
                    writeln!(out, "{}:{}:", m.path, m.line)?;
                    for line in context.lines() {
                        writeln!(out, "  {line}")?;
                    }
                    writeln!(out, "--")?;
                }
                None => writeln!(out, "{}:{}:{}", m.path, m.line, m.content)?,
            }
        }
        Ok(())
    }

    pub fn content(&self, path: &str, content: &str) -> Result<()> {
        if self.json {
            return self.emit_json(&serde_json::json!({ "path": path, "content": content }));
        }
        let mut out = io::stdout().lock();
        write!(out, "{content}")?;
        if !content.ends_with('\n') {
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn stat(&self, stat: &FileStat) -> Result<()> {
        if self.json {
            return self.emit_json(stat);
        }
        let mut out = io::stdout().lock();
        writeln!(out, "path:      {}", stat.path)?;
        writeln!(out, "size:      {}", stat.size)?;
        writeln!(out, "type:      file")?;
        writeln!(out, "created:   {}", epoch_secs(stat.created))?;
        writeln!(out, "modified:  {}", epoch_secs(stat.modified))?;
        writeln!(out, "accessed:  {}", epoch_secs(stat.accessed))?;
        Ok(())
    }

    pub fn command(&self, output: &CommandOutput) -> Result<()> {
        if self.json {
            return self.emit_json(output);
        }
        let mut err = io::stderr().lock();
        writeln!(err, "{}", output.stderr)?;
        Ok(())
    }
}

/// Seconds since the Unix epoch, with millisecond precision.
fn epoch_secs(t: SystemTime) -> String {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => format!("{}.{:03}", d.as_secs(), d.subsec_millis()),
        Err(_) => "before epoch".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_epoch_secs() {
        let t = UNIX_EPOCH + Duration::from_millis(1_500);
        assert_eq!(epoch_secs(t), "1.500");
    }
}
