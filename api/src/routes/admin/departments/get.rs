use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use db::models::department;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use util::state::AppState;

use crate::auth::PortalError;
use crate::response::ApiResponse;
use crate::routes::common::{paginate, search_term};

#[derive(Debug, Deserialize)]
pub struct DepartmentFilter {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub query: Option<String>,
}

/// GET /admin/departments
///
/// Paginated departments ordered by name. `query` matches name or code.
pub async fn list_departments(
    State(state): State<AppState>,
    Query(filter): Query<DepartmentFilter>,
) -> Result<impl IntoResponse, PortalError> {
    let mut condition = Condition::all();
    if let Some(q) = search_term(&filter.query) {
        condition = condition.add(
            Condition::any()
                .add(department::Column::Name.contains(q))
                .add(department::Column::Code.contains(q)),
        );
    }

    let select = department::Entity::find()
        .filter(condition)
        .order_by_asc(department::Column::Name);
    let page = paginate(state.db(), select, filter.page, filter.per_page).await?;

    Ok(Json(ApiResponse::success(
        page,
        "Departments retrieved successfully",
    )))
}
