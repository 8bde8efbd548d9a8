use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{NaiveDate, Utc};
use db::models::fee::{self, FeeType, NewFee};
use rust_decimal::Decimal;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;
use crate::routes::student::common::FeeView;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFeeRequest {
    /// The student's user id.
    pub student_id: i64,
    pub fee_type: FeeType,
    /// Decimal with at most two places, e.g. `"15000.00"`.
    pub amount: Decimal,
    pub due_date: NaiveDate,

    #[validate(length(min = 1, max = 9, message = "Academic year must look like 2024-2025"))]
    pub academic_year: String,

    #[validate(range(min = 1, max = 8, message = "Semester must be between 1 and 8"))]
    pub semester: i32,

    #[serde(default)]
    pub remarks: String,
}

/// POST /admin/fees
///
/// Raises a fee against a student. New fees start as `pending`.
///
/// ### Request Body
/// ```json
/// {
///   "student_id": 3,
///   "fee_type": "tuition",
///   "amount": "15000.00",
///   "due_date": "2024-08-31",
///   "academic_year": "2024-2025",
///   "semester": 1
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (negative amount, more than two decimals, unknown student)
pub async fn create_fee(
    State(state): State<AppState>,
    Json(req): Json<CreateFeeRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let fee = fee::Model::create(
        state.db(),
        NewFee {
            student_id: req.student_id,
            fee_type: req.fee_type,
            amount: req.amount,
            due_date: req.due_date,
            academic_year: req.academic_year,
            semester: req.semester,
            remarks: req.remarks,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            FeeView::new(&fee, Utc::now().date_naive()),
            "Fee created successfully",
        )),
    ))
}
