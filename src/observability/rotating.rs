//! Append-only line writer that rotates by size.
//!
//! When the live file grows past its limit it is renamed to
//! `<name>.<timestamp>` (local time, `chrono`) and a fresh file is started.
//! Only the newest backups are kept.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold for the live trace file.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups retained after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

const BACKUP_TIMESTAMP: &str = "%Y%m%dT%H%M%S%.6f";

#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    keep: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub fn with_limits(path: PathBuf, max_bytes: u64, keep: usize) -> Self {
        Self {
            path,
            max_bytes,
            keep,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too large.
    ///
    /// The file is opened lazily on the first write and after each rotation.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let backup = self.next_backup_path();
        fs::rename(&self.path, backup)?;
        self.prune_backups()
    }

    fn next_backup_path(&self) -> PathBuf {
        let stamp = Local::now().format(BACKUP_TIMESTAMP).to_string();
        let base = append_suffix(&self.path, &stamp);

        let mut candidate = base.clone();
        let mut n = 1;
        while candidate.exists() {
            candidate = append_suffix(&base, &n.to_string());
            n += 1;
        }
        candidate
    }

    /// Lists backups of this file, newest first.
    pub fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let Some(prefix) = self.path.file_name().and_then(|n| n.to_str()).map(|n| format!("{n}.")) else {
            return Ok(vec![]);
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // Timestamps sort lexically; a collision suffix sorts after its base.
        backups.sort();
        backups.reverse();
        Ok(backups)
    }

    fn prune_backups(&self) -> io::Result<()> {
        for stale in self.backups()?.iter().skip(self.keep) {
            // Logging here would re-enter the exporter.
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lines_without_rotating_under_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::new(path.clone());

        writer.append_line("{\"a\":1}").unwrap();
        writer.append_line("{\"a\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\":1}\n{\"a\":2}\n");
        assert!(writer.backups().unwrap().is_empty());
    }

    #[test]
    fn rotates_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::with_limits(path.clone(), 16, 3);

        for n in 0..6 {
            writer.append_line(&format!("{{\"line\":\"{n:0>12}\"}}")).unwrap();
        }

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 3);

        let live = fs::read_to_string(&path).unwrap();
        assert_eq!(live.lines().count(), 1);
        assert!(live.contains("000000000005"));

        let newest = fs::read_to_string(&backups[0]).unwrap();
        assert!(newest.contains("000000000004"));
    }

    #[test]
    fn unrelated_files_are_not_backups() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("trace.jsonl"), "x").unwrap();
        fs::write(dir.path().join("other.json.1"), "x").unwrap();

        let writer = RotatingFile::new(dir.path().join("trace.json"));
        assert!(writer.backups().unwrap().is_empty());
    }
}
