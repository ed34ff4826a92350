use crate::{
    ledger::LeaveLedger,
    model::employee::{Employee, NewEmployee},
};
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
}

#[derive(Serialize, ToSchema)]
pub struct BalanceResponse {
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = 19)]
    pub balance: u32,
}

#[derive(Serialize, ToSchema)]
pub struct NextIdResponse {
    #[schema(example = "E002")]
    pub next_id: String,
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = NewEmployee,
    responses(
        (status = 200, description = "Employee created", body = Object, example = json!({
            "message": "Employee created",
            "employee": {
                "id": "E001",
                "name": "John Doe",
                "email": "john.doe@company.com",
                "department": "Engineering",
                "joining_date": "2024-01-01",
                "leave_balance": 24
            }
        })),
        (status = 400, description = "Invalid date or email, duplicate id or email", body = Object, example = json!({
            "message": "Email already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    ledger: web::Data<LeaveLedger>,
    payload: web::Json<NewEmployee>,
) -> actix_web::Result<impl Responder> {
    let employee = web::block(move || ledger.create_employee(payload.into_inner())).await??;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee created",
        "employee": employee
    })))
}

/// List Employees in table order
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = EmployeeListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(ledger: web::Data<LeaveLedger>) -> actix_web::Result<impl Responder> {
    let employees = web::block(move || ledger.list_employees()).await??;
    debug!(count = employees.len(), "Listing employees");

    Ok(HttpResponse::Ok().json(EmployeeListResponse { employees }))
}

/// Current leave balance of an employee
#[utoipa::path(
    get,
    path = "/employees/{employee_id}/balance",
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Balance found", body = BalanceResponse),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_balance(
    ledger: web::Data<LeaveLedger>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let lookup_id = employee_id.clone();
    let balance = web::block(move || ledger.get_balance(&lookup_id)).await??;

    Ok(HttpResponse::Ok().json(BalanceResponse {
        employee_id,
        balance,
    }))
}

/// Preview the id the next registration would receive
#[utoipa::path(
    get,
    path = "/employees/next-id",
    responses(
        (status = 200, description = "Next employee id", body = NextIdResponse)
    ),
    tag = "Employee"
)]
pub async fn next_employee_id(ledger: web::Data<LeaveLedger>) -> actix_web::Result<impl Responder> {
    let next_id = web::block(move || ledger.next_employee_id()).await??;
    Ok(HttpResponse::Ok().json(NextIdResponse { next_id }))
}
