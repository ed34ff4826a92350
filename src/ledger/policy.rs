//! Leave policy knobs. Fixed for now: every calendar day in the range counts,
//! weekends included, and both endpoints are leave days.

/// Annual allowance granted at registration.
pub const ANNUAL_LEAVE_DAYS: u32 = 24;
/// Saturdays and Sundays inside a range are charged as leave.
pub const COUNT_WEEKENDS: bool = true;
/// Both the start and the end date are charged as leave.
pub const INCLUSIVE_DATES: bool = true;

pub const EMPLOYEE_ID_PREFIX: char = 'E';
pub const LEAVE_ID_PREFIX: char = 'L';
