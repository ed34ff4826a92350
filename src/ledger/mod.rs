//! The leave ledger: every rule about who may take which days, and every
//! mutation of the employee and leave tables, goes through [`LeaveLedger`].
//!
//! Mutations run as one read-validate-write cycle under a per-table writer
//! lock. When both tables are needed the employees lock is taken first.
//! Readers take no lock; they rely on the store replacing tables atomically.

pub mod dates;
pub mod error;
pub mod id_alloc;
pub mod policy;

pub use error::LedgerError;

use crate::model::{
    employee::{Employee, NewEmployee},
    leave_request::{ApplyLeave, LeaveRequest, LeaveStatus},
};
use crate::store::TableStore;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, warn};

use dates::{leave_days, parse_date};
use id_alloc::next_id;
use policy::{ANNUAL_LEAVE_DAYS, EMPLOYEE_ID_PREFIX, LEAVE_ID_PREFIX};

pub type LedgerResult<T> = Result<T, LedgerError>;

pub struct LeaveLedger {
    store: Arc<dyn TableStore>,
    employees_lock: Mutex<()>,
    leaves_lock: Mutex<()>,
}

impl LeaveLedger {
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            store,
            employees_lock: Mutex::new(()),
            leaves_lock: Mutex::new(()),
        }
    }

    /* =========================
    Employees
    ========================= */

    pub fn create_employee(&self, input: NewEmployee) -> LedgerResult<Employee> {
        let joining_date = parse_date(&input.joining_date)
            .ok_or_else(|| LedgerError::validation("Invalid joining_date"))?;
        if !looks_like_email(&input.email) {
            return Err(LedgerError::validation("Invalid email"));
        }

        let _guard = lock(&self.employees_lock);
        let mut employees = self.store.load_employees()?;

        let id = match supplied_id(input.id) {
            Some(id) => id,
            None => next_id(EMPLOYEE_ID_PREFIX, employees.iter().map(|e| e.id.as_str())),
        };

        if employees.iter().any(|e| e.id == id) {
            return Err(LedgerError::conflict("Employee ID already exists"));
        }
        let email = input.email.trim().to_string();
        if employees.iter().any(|e| e.email.to_lowercase() == email.to_lowercase()) {
            return Err(LedgerError::conflict("Email already exists"));
        }

        let employee = Employee {
            id,
            name: input.name,
            email,
            department: input.department,
            joining_date,
            leave_balance: ANNUAL_LEAVE_DAYS,
        };
        employees.push(employee.clone());
        self.store.replace_employees(&employees)?;

        info!(employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    pub fn list_employees(&self) -> LedgerResult<Vec<Employee>> {
        Ok(self.store.load_employees()?)
    }

    pub fn get_balance(&self, employee_id: &str) -> LedgerResult<u32> {
        self.store
            .load_employees()?
            .into_iter()
            .find(|e| e.id == employee_id)
            .map(|e| e.leave_balance)
            .ok_or_else(|| LedgerError::not_found("Employee not found"))
    }

    /// Id the next registration would receive. Nothing is reserved.
    pub fn next_employee_id(&self) -> LedgerResult<String> {
        let employees = self.store.load_employees()?;
        Ok(next_id(EMPLOYEE_ID_PREFIX, employees.iter().map(|e| e.id.as_str())))
    }

    /* =========================
    Leave requests
    ========================= */

    pub fn apply_leave(&self, input: ApplyLeave) -> LedgerResult<LeaveRequest> {
        let _guard = lock(&self.leaves_lock);

        let employee = self
            .store
            .load_employees()?
            .into_iter()
            .find(|e| e.id == input.employee_id)
            .ok_or_else(|| LedgerError::not_found("Employee not found"))?;

        let (start_date, end_date) = match (parse_date(&input.start_date), parse_date(&input.end_date)) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(LedgerError::validation("Invalid dates")),
        };
        if end_date < start_date {
            return Err(LedgerError::validation("end_date before start_date"));
        }
        if start_date < employee.joining_date {
            return Err(LedgerError::validation(
                "Cannot apply for leave before joining date",
            ));
        }

        let mut leaves = self.store.load_leaves()?;

        let overlapping = leaves.iter().find(|l| {
            l.employee_id == employee.id && l.status.blocks_dates() && l.overlaps(start_date, end_date)
        });
        if let Some(existing) = overlapping {
            debug!(employee_id = %employee.id, existing = %existing.id, "Overlap detected");
            return Err(LedgerError::conflict("Overlapping leave request exists"));
        }

        let days = leave_days(start_date, end_date);
        if days > employee.leave_balance {
            return Err(LedgerError::validation(
                "Requested days exceed available balance",
            ));
        }

        let id = match supplied_id(input.id) {
            Some(id) => id,
            None => next_id(LEAVE_ID_PREFIX, leaves.iter().map(|l| l.id.as_str())),
        };
        if leaves.iter().any(|l| l.id == id) {
            return Err(LedgerError::conflict("Leave ID already exists"));
        }

        let leave = LeaveRequest {
            id,
            employee_id: employee.id,
            start_date,
            end_date,
            days,
            status: LeaveStatus::Pending,
            applied_at: Utc::now(),
            reason: input.reason.filter(|r| !r.trim().is_empty()),
        };
        leaves.push(leave.clone());
        self.store.replace_leaves(&leaves)?;

        info!(leave_id = %leave.id, employee_id = %leave.employee_id, days, "Leave applied");
        Ok(leave)
    }

    /// Debits the balance and marks the request approved. The balance is
    /// checked again here since other approvals may have drained it.
    pub fn approve_leave(&self, leave_id: &str) -> LedgerResult<LeaveRequest> {
        let _employees_guard = lock(&self.employees_lock);
        let _leaves_guard = lock(&self.leaves_lock);

        let mut leaves = self.store.load_leaves()?;
        let idx = pending_index(&leaves, leave_id)?;

        let mut employees = self.store.load_employees()?;
        let snapshot = employees.clone();
        let employee = employees
            .iter_mut()
            .find(|e| e.id == leaves[idx].employee_id)
            .ok_or_else(|| LedgerError::not_found("Employee not found"))?;

        let days = leaves[idx].days;
        if days > employee.leave_balance {
            warn!(
                leave_id,
                employee_id = %employee.id,
                days,
                balance = employee.leave_balance,
                "Insufficient balance at approval time"
            );
            return Err(LedgerError::conflict("Insufficient balance at approval time"));
        }
        employee.leave_balance -= days;
        let balance = employee.leave_balance;

        leaves[idx].status = LeaveStatus::Approved;

        self.store.replace_employees(&employees)?;
        if let Err(e) = self.store.replace_leaves(&leaves) {
            error!(error = %e, leave_id, "Failed to persist approval, restoring balances");
            if let Err(restore) = self.store.replace_employees(&snapshot) {
                error!(error = %restore, leave_id, "Failed to restore employees table");
            }
            return Err(e.into());
        }

        info!(leave_id, balance, "Leave approved");
        Ok(leaves.swap_remove(idx))
    }

    /// Marks the request rejected. A non-blank `reason` replaces the stored one.
    pub fn reject_leave(&self, leave_id: &str, reason: Option<String>) -> LedgerResult<LeaveRequest> {
        let _guard = lock(&self.leaves_lock);

        let mut leaves = self.store.load_leaves()?;
        let idx = pending_index(&leaves, leave_id)?;

        leaves[idx].status = LeaveStatus::Rejected;
        if let Some(reason) = reason.filter(|r| !r.trim().is_empty()) {
            leaves[idx].reason = Some(reason);
        }
        self.store.replace_leaves(&leaves)?;

        info!(leave_id, "Leave rejected");
        Ok(leaves.swap_remove(idx))
    }

    pub fn list_pending(&self) -> LedgerResult<Vec<LeaveRequest>> {
        let leaves = self.store.load_leaves()?;
        Ok(leaves
            .into_iter()
            .filter(|l| l.status == LeaveStatus::Pending)
            .collect())
    }

    /// Id the next application would receive. Nothing is reserved.
    pub fn next_leave_id(&self) -> LedgerResult<String> {
        let leaves = self.store.load_leaves()?;
        Ok(next_id(LEAVE_ID_PREFIX, leaves.iter().map(|l| l.id.as_str())))
    }
}

// The guarded data is `()`, so a poisoned lock carries no broken state.
fn lock(mutex: &Mutex<()>) -> MutexGuard<'_, ()> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn supplied_id(id: Option<String>) -> Option<String> {
    id.map(|id| id.trim().to_string()).filter(|id| !id.is_empty())
}

fn pending_index(leaves: &[LeaveRequest], leave_id: &str) -> LedgerResult<usize> {
    let idx = leaves
        .iter()
        .position(|l| l.id == leave_id)
        .ok_or_else(|| LedgerError::not_found("Leave not found"))?;

    match leaves[idx].status {
        LeaveStatus::Pending => Ok(idx),
        status => Err(LedgerError::state(format!(
            "Leave not in PENDING state (currently {status})"
        ))),
    }
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
