use super::{StoreError, TableStore};
use crate::model::{employee::Employee, leave_request::LeaveRequest};
use std::sync::{PoisonError, RwLock};

/// In-process tables, used by tests and by callers that embed the ledger.
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: RwLock<Vec<Employee>>,
    leaves: RwLock<Vec<LeaveRequest>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableStore for MemoryStore {
    fn load_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let rows = self.employees.read().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.clone())
    }

    fn replace_employees(&self, rows: &[Employee]) -> Result<(), StoreError> {
        let mut table = self.employees.write().unwrap_or_else(PoisonError::into_inner);
        *table = rows.to_vec();
        Ok(())
    }

    fn load_leaves(&self) -> Result<Vec<LeaveRequest>, StoreError> {
        let rows = self.leaves.read().unwrap_or_else(PoisonError::into_inner);
        Ok(rows.clone())
    }

    fn replace_leaves(&self, rows: &[LeaveRequest]) -> Result<(), StoreError> {
        let mut table = self.leaves.write().unwrap_or_else(PoisonError::into_inner);
        *table = rows.to_vec();
        Ok(())
    }
}
