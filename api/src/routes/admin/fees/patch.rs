use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use db::models::fee::{self, PaymentStatus, PaymentUpdate};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::validate;
use crate::routes::student::common::FeeView;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFeeRequest {
    pub payment_status: Option<PaymentStatus>,
    pub payment_date: Option<NaiveDate>,

    #[validate(length(max = 50, message = "Payment method is at most 50 characters"))]
    pub payment_method: Option<String>,

    #[validate(length(max = 100, message = "Transaction id is at most 100 characters"))]
    pub transaction_id: Option<String>,

    pub remarks: Option<String>,
}

/// PATCH /admin/fees/{fee_id}
///
/// Records a payment. Only the fields present are changed.
///
/// ### Request Body
/// ```json
/// {
///   "payment_status": "paid",
///   "payment_date": "2024-08-20",
///   "payment_method": "bank transfer",
///   "transaction_id": "TXN-0001"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated fee
/// - `404 Not Found`
pub async fn update_fee(
    State(state): State<AppState>,
    Path(fee_id): Path<i64>,
    Json(req): Json<UpdateFeeRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let fee = fee::Model::update_payment(
        state.db(),
        fee_id,
        PaymentUpdate {
            payment_status: req.payment_status,
            payment_date: req.payment_date,
            payment_method: req.payment_method,
            transaction_id: req.transaction_id,
            remarks: req.remarks,
        },
    )
    .await?;

    tracing::info!(fee = fee.id, status = %fee.payment_status, "Fee payment updated");
    Ok(Json(ApiResponse::success(
        FeeView::new(&fee, Utc::now().date_naive()),
        "Fee updated successfully",
    )))
}

#[derive(Debug, Deserialize, Validate)]
pub struct BulkStatusRequest {
    #[validate(length(min = 1, message = "At least one id is required"))]
    pub ids: Vec<i64>,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Serialize)]
pub struct BulkUpdateResponse {
    pub updated: u64,
}

/// PATCH /admin/fees
///
/// Sets the payment status of many fees at once.
///
/// ### Request Body
/// ```json
/// { "ids": [4, 5], "payment_status": "paid" }
/// ```
pub async fn update_fee_statuses(
    State(state): State<AppState>,
    Json(req): Json<BulkStatusRequest>,
) -> Result<impl IntoResponse, PortalError> {
    validate(&req)?;

    let updated = fee::Model::set_status_bulk(state.db(), &req.ids, req.payment_status).await?;
    tracing::info!(updated, status = %req.payment_status, "Fee statuses updated");

    Ok(Json(ApiResponse::success(
        BulkUpdateResponse { updated },
        format!("{updated} fees updated"),
    )))
}
