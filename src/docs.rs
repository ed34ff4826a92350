use crate::api::employee::{BalanceResponse, EmployeeListResponse, NextIdResponse};
use crate::api::leave_request::PendingLeavesResponse;
use crate::model::employee::{Employee, NewEmployee};
use crate::model::leave_request::{ApplyLeave, LeaveDecision, LeaveRequest, LeaveStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Ledger API",
        version = "0.1.0",
        description = r#"
## Leave Ledger

Tracks employee leave balances and leave requests in spreadsheet-backed tables.

### Key Features
- **Employees**
  - Register employees with the annual allowance of 24 days, list them, read balances
- **Leave**
  - Apply for leave, approve or reject pending requests, list pending requests

### Rules
- Leave ranges are inclusive; weekends count
- A request may not start before the joining date or overlap another pending/approved request
- The balance is checked when applying and again when approving

### Response Format
- JSON bodies; errors carry a `message` field
"#,
    ),
    paths(
        crate::api::health::health,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_balance,
        crate::api::employee::next_employee_id,

        crate::api::leave_request::apply_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,
        crate::api::leave_request::pending_leaves,
        crate::api::leave_request::next_leave_id
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            EmployeeListResponse,
            BalanceResponse,
            NextIdResponse,
            LeaveRequest,
            LeaveStatus,
            ApplyLeave,
            LeaveDecision,
            PendingLeavesResponse
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Employee", description = "Employee and balance APIs"),
        (name = "Leave", description = "Leave request APIs"),
    )
)]
pub struct ApiDoc;
