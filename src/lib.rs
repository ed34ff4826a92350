//! Leave ledger service: employee leave balances and leave requests kept in
//! spreadsheet-backed tables, served over a small JSON API.

pub mod api;
pub mod config;
pub mod docs;
pub mod ledger;
pub mod model;
pub mod routes;
pub mod store;

pub use ledger::{LeaveLedger, LedgerError};
