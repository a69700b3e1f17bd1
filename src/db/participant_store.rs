use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::db::schema;
use crate::error::{RosterError, RosterResult};
use crate::model::{Participant, Table};

/// Whole-file persistence for the roster. Every load reads the full file and
/// every save rewrites it; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ParticipantStore {
    path: PathBuf,
}

impl ParticipantStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the full table. A missing file is created with the seed rows.
    pub fn load(&self) -> RosterResult<Table> {
        if !self.exists() {
            warn!(path = %self.path.display(), "data file missing, writing seed roster");
            let seeds = schema::seed_rows();
            self.save(&seeds)?;
            return Ok(seeds);
        }

        let file = File::open(&self.path).map_err(|e| self.unavailable(e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(file);

        let headers = reader.headers().map_err(|e| self.unavailable(e))?.clone();
        schema::check_header(&headers).map_err(|reason| self.unavailable(reason))?;

        let mut table = Table::new();
        for (index, row) in reader.deserialize::<Participant>().enumerate() {
            let participant =
                row.map_err(|e| self.unavailable(format!("row {}: {}", index + 1, e)))?;
            table.push(participant);
        }

        debug!(path = %self.path.display(), rows = table.len(), "loaded roster");
        Ok(table)
    }

    /// Overwrites the file with `table`. The rows go to a sibling temp file
    /// first, which is then renamed over the target.
    pub fn save(&self, table: &[Participant]) -> RosterResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }

        let tmp = self.temp_path();
        if let Err(e) = write_table(&tmp, table) {
            let _ = fs::remove_file(&tmp);
            return Err(self.unavailable(e));
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.unavailable(e));
        }

        debug!(path = %self.path.display(), rows = table.len(), "saved roster");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "roster.csv".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn unavailable(&self, reason: impl ToString) -> RosterError {
        RosterError::storage(&self.path, reason)
    }
}

fn write_table(path: &Path, table: &[Participant]) -> RosterResult<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer.write_record(schema::HEADER)?;
    for participant in table {
        writer.serialize(participant)?;
    }

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}
