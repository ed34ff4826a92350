//! Whole-table persistence for the two ledger tables.
//!
//! A store only knows how to hand out a full snapshot of a table and how to
//! replace one wholesale. Serializing writers is the ledger's job; a store
//! must only guarantee that a reader never sees a half-written table.

mod csv_store;
mod memory;

pub use csv_store::CsvStore;
pub use memory::MemoryStore;

use crate::model::{employee::Employee, leave_request::LeaveRequest};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("table io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed table row: {0}")]
    Csv(#[from] csv::Error),
}

pub trait TableStore: Send + Sync {
    fn load_employees(&self) -> Result<Vec<Employee>, StoreError>;
    fn replace_employees(&self, rows: &[Employee]) -> Result<(), StoreError>;
    fn load_leaves(&self) -> Result<Vec<LeaveRequest>, StoreError>;
    fn replace_leaves(&self, rows: &[LeaveRequest]) -> Result<(), StoreError>;
}
