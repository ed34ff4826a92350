use super::{StoreError, TableStore};
use crate::model::{
    employee::{EMPLOYEE_COLUMNS, Employee},
    leave_request::{LEAVE_COLUMNS, LeaveRequest},
};
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const EMPLOYEES_FILE: &str = "employees.csv";
pub const LEAVES_FILE: &str = "leaves.csv";

/// Spreadsheet-backed tables: one CSV file per table inside `dir`.
#[derive(Debug, Clone)]
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    /// Opens the data directory, creating it and header-only tables if missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { dir: dir.into() };
        fs::create_dir_all(&store.dir)?;

        if !store.employees_path().exists() {
            write_table::<Employee>(&store.employees_path(), &EMPLOYEE_COLUMNS, &[])?;
            info!(path = %store.employees_path().display(), "Created employees table");
        }
        if !store.leaves_path().exists() {
            write_table::<LeaveRequest>(&store.leaves_path(), &LEAVE_COLUMNS, &[])?;
            info!(path = %store.leaves_path().display(), "Created leaves table");
        }

        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn employees_path(&self) -> PathBuf {
        self.dir.join(EMPLOYEES_FILE)
    }

    fn leaves_path(&self) -> PathBuf {
        self.dir.join(LEAVES_FILE)
    }
}

impl TableStore for CsvStore {
    fn load_employees(&self) -> Result<Vec<Employee>, StoreError> {
        read_table(&self.employees_path())
    }

    fn replace_employees(&self, rows: &[Employee]) -> Result<(), StoreError> {
        write_table(&self.employees_path(), &EMPLOYEE_COLUMNS, rows)
    }

    fn load_leaves(&self) -> Result<Vec<LeaveRequest>, StoreError> {
        read_table(&self.leaves_path())
    }

    fn replace_leaves(&self, rows: &[LeaveRequest]) -> Result<(), StoreError> {
        write_table(&self.leaves_path(), &LEAVE_COLUMNS, rows)
    }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;

    let rows = reader
        .deserialize::<T>()
        .collect::<Result<Vec<_>, _>>()?;

    debug!(path = %path.display(), rows = rows.len(), "Loaded table");
    Ok(rows)
}

/// Writes the whole table to a sibling temp file, then renames it into place.
fn write_table<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<(), StoreError> {
    let tmp = path.with_extension("csv.tmp");

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(File::create(&tmp)?);
    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let file = writer.into_inner().map_err(|e| StoreError::Io(e.into_error()))?;
    file.sync_all()?;
    drop(file);

    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), rows = rows.len(), "Replaced table");
    Ok(())
}
