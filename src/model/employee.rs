use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Column order of the employees table.
pub const EMPLOYEE_COLUMNS: [&str; 6] = [
    "id",
    "name",
    "email",
    "department",
    "joining_date",
    "leave_balance",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "E001",
        "name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "joining_date": "2024-01-01",
        "leave_balance": 24
    })
)]
pub struct Employee {
    #[schema(example = "E001")]
    pub id: String,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(
        example = "2024-01-01",
        value_type = String,
        format = "date"
    )]
    pub joining_date: NaiveDate,

    #[schema(example = 24)]
    pub leave_balance: u32,
}

/// Registration payload. Dates arrive as text and are validated by the ledger.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewEmployee {
    /// Allocated by the ledger when absent or blank
    #[schema(example = "E001", nullable = true)]
    #[serde(default)]
    pub id: Option<String>,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john@email.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub joining_date: String,
}
