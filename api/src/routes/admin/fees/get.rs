use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::Utc;
use db::models::{
    fee::{self, FeeType, PaymentStatus},
    user,
};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::{paginate, search_term};
use crate::routes::student::common::FeeView;

#[derive(Debug, Deserialize)]
pub struct FeeFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub fee_type: Option<FeeType>,
    pub payment_status: Option<PaymentStatus>,
    pub academic_year: Option<String>,
    pub semester: Option<i32>,
}

/// GET /admin/fees
///
/// Paginated fees, newest first, each with its overdue flag. `query` matches
/// the student's username or the transaction id.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "items": [
///       {
///         "id": 1,
///         "fee_type": "tuition",
///         "amount": "15000.00",
///         "due_date": "2024-08-31",
///         "payment_status": "pending",
///         "is_overdue": true,
///         "...": "..."
///       }
///     ],
///     "page": 1,
///     "per_page": 20,
///     "total": 1
///   },
///   "message": "Fees retrieved successfully"
/// }
/// ```
pub async fn list_fees(
    State(state): State<AppState>,
    Query(filter): Query<FeeFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();
    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(
            Condition::any()
                .add(user::Column::Username.contains(q))
                .add(fee::Column::TransactionId.contains(q)),
        );
    }
    if let Some(fee_type) = filter.fee_type {
        condition = condition.add(fee::Column::FeeType.eq(fee_type));
    }
    if let Some(status) = filter.payment_status {
        condition = condition.add(fee::Column::PaymentStatus.eq(status));
    }
    if let Some(year) = search_term(&filter.academic_year) {
        condition = condition.add(fee::Column::AcademicYear.eq(year));
    }
    if let Some(semester) = filter.semester {
        condition = condition.add(fee::Column::Semester.eq(semester));
    }

    let select = fee::Entity::find()
        .join(JoinType::InnerJoin, fee::Relation::Student.def())
        .filter(condition)
        .order_by_desc(fee::Column::CreatedAt)
        .order_by_desc(fee::Column::Id);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    let today = Utc::now().date_naive();
    Ok(Json(ApiResponse::success(
        page.map(|f| FeeView::new(&f, today)),
        "Fees retrieved successfully",
    )))
}
