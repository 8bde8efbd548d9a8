//! Helpers shared by the portal and admin route groups.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, Select};
use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::auth::PortalError;

pub const DEFAULT_PER_PAGE: u64 = 20;
pub const MAX_PER_PAGE: u64 = 100;
/// Highest page whose offset still fits a SQL `OFFSET` at the largest page size.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PER_PAGE;

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Runs `validator` rules, turning failures into a `400`.
pub fn validate<T: Validate>(req: &T) -> Result<(), PortalError> {
    req.validate()
        .map_err(|errors| PortalError::BadRequest(format_validation_errors(&errors)))
}

/// One page of a list endpoint.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }

    /// Slices an already-ordered, fully loaded list.
    pub fn from_vec(all: Vec<T>, page: Option<u64>, per_page: Option<u64>) -> Self {
        let (page, per_page) = page_bounds(page, per_page);
        let total = all.len() as u64;
        let offset = usize::try_from((page - 1).saturating_mul(per_page)).unwrap_or(usize::MAX);
        let items = all
            .into_iter()
            .skip(offset)
            .take(per_page as usize)
            .collect();
        Self {
            items,
            page,
            per_page,
            total,
        }
    }
}

/// Page defaults to 1 and is capped at [`MAX_PAGE`]. Page size defaults to
/// 20, capped at 100.
pub fn page_bounds(page: Option<u64>, per_page: Option<u64>) -> (u64, u64) {
    (
        page.unwrap_or(1).clamp(1, MAX_PAGE),
        per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE),
    )
}

/// Counts and fetches one page of `select`.
pub async fn paginate<'db, E, C>(
    db: &'db C,
    select: Select<E>,
    page: Option<u64>,
    per_page: Option<u64>,
) -> Result<Page<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Sized + Send + Sync + 'db,
    C: ConnectionTrait,
{
    let (page, per_page) = page_bounds(page, per_page);
    let paginator = select.paginate(db, per_page);
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page - 1).await?;
    Ok(Page {
        items,
        page,
        per_page,
        total,
    })
}

/// Trims a search string, treating blank as absent.
pub fn search_term(query: &Option<String>) -> Option<&str> {
    query.as_deref().map(str::trim).filter(|q| !q.is_empty())
}
