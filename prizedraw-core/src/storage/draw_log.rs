use crate::error::{DrawError, Result};
use crate::types::LogRecord;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const LOG_HEADER: [&str; 4] = ["count", "name", "urc", "prize"];

/// CSV file recording every revealed entry in order
#[derive(Debug, Clone)]
pub struct DrawLog {
    path: PathBuf,
}

impl DrawLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// File name offered to downloads
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "winners_log.csv".to_string())
    }

    pub fn append(&self, record: &LogRecord) -> Result<()> {
        self.ensure_parent()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if needs_header {
            writer.write_record(LOG_HEADER)?;
        }
        writer.serialize(record)?;
        writer.flush()?;
        writer.get_ref().sync_data()?;

        tracing::debug!(
            "Logged #{} {} ({}) to {}",
            record.position,
            record.name,
            record.identity_code,
            self.path.display()
        );
        Ok(())
    }

    /// Replace the log with just the header line
    pub fn truncate(&self) -> Result<()> {
        self.ensure_parent()?;
        let mut file = File::create(&self.path)?;
        writeln!(file, "{}", LOG_HEADER.join(","))?;
        file.sync_data()?;

        tracing::info!("Draw log {} reset", self.path.display());
        Ok(())
    }

    /// Raw file content for download
    pub fn export(&self) -> Result<Vec<u8>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DrawError::LogUnavailable),
            Err(e) => Err(e.into()),
        }
    }

    pub fn records(&self) -> Result<Vec<LogRecord>> {
        let bytes = self.export()?;
        let mut reader = csv::Reader::from_reader(bytes.as_slice());

        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DrawError::internal(format!("Failed to create directory: {}", e))
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(position: usize, name: &str, prize_label: &str) -> LogRecord {
        LogRecord {
            position,
            name: name.to_string(),
            identity_code: format!("ID{}", position),
            prize_label: prize_label.to_string(),
        }
    }

    #[test]
    fn test_export_before_any_write() {
        let dir = tempdir().unwrap();
        let log = DrawLog::new(dir.path().join("winners_log.csv"));
        assert!(!log.exists());
        assert!(matches!(log.export(), Err(DrawError::LogUnavailable)));
    }

    #[test]
    fn test_append_writes_header_once() {
        let dir = tempdir().unwrap();
        let log = DrawLog::new(dir.path().join("winners_log.csv"));

        log.append(&record(1, "Asha", "Silver Coin")).unwrap();
        log.append(&record(2, "Ravi", "Silver Coin")).unwrap();

        let content = String::from_utf8(log.export().unwrap()).unwrap();
        assert_eq!(
            content,
            "count,name,urc,prize\n1,Asha,ID1,Silver Coin\n2,Ravi,ID2,Silver Coin\n"
        );
        assert_eq!(log.records().unwrap().len(), 2);
    }

    #[test]
    fn test_truncate_leaves_header() {
        let dir = tempdir().unwrap();
        let log = DrawLog::new(dir.path().join("nested").join("winners_log.csv"));

        log.append(&record(1, "Asha", "Car")).unwrap();
        log.truncate().unwrap();

        let content = String::from_utf8(log.export().unwrap()).unwrap();
        assert_eq!(content, "count,name,urc,prize\n");
        assert!(log.records().unwrap().is_empty());

        log.append(&record(1, "Ravi", "Bike")).unwrap();
        assert_eq!(log.records().unwrap(), vec![record(1, "Ravi", "Bike")]);
    }

    #[test]
    fn test_quotes_names_with_commas() {
        let dir = tempdir().unwrap();
        let log = DrawLog::new(dir.path().join("winners_log.csv"));

        log.append(&record(1, "Rao, Asha", "Led Tv")).unwrap();

        let content = String::from_utf8(log.export().unwrap()).unwrap();
        assert!(content.ends_with("1,\"Rao, Asha\",ID1,Led Tv\n"));
        assert_eq!(log.records().unwrap()[0].name, "Rao, Asha");
    }
}
