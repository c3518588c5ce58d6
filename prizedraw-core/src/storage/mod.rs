pub mod draw_log;

pub use draw_log::DrawLog;

use crate::error::Result;
use crate::types::LogRecord;

/// Destination for revealed entries.
///
/// Append-only apart from `truncate`, which drops every record.
pub trait RevealLog {
    fn append(&mut self, record: &LogRecord) -> Result<()>;
    fn truncate(&mut self) -> Result<()>;
}

impl RevealLog for DrawLog {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        DrawLog::append(self, record)
    }

    fn truncate(&mut self) -> Result<()> {
        DrawLog::truncate(self)
    }
}

#[cfg(test)]
impl RevealLog for Vec<LogRecord> {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }

    fn truncate(&mut self) -> Result<()> {
        self.clear();
        Ok(())
    }
}
