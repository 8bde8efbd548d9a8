//! Role gates applied with `route_layer(from_fn_with_state(...))`.
//!
//! Each guard authenticates the bearer token, checks that the account still
//! exists and is active, stores the resulting [`AuthUser`] in the request
//! extensions for downstream extractors, and rejects callers whose role does
//! not match the portal.

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use db::models::user::Role;
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::auth::error::PortalError;
use crate::auth::extractors::load_user;

/// Authenticates the request and stores the caller in its extensions.
async fn extract_and_insert_authuser(
    state: &AppState,
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), PortalError> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, state).await?;
    load_user(state, &user.0).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

async fn allow_role(
    state: &AppState,
    req: Request<Body>,
    next: Next,
    role: Role,
) -> Result<Response, PortalError> {
    let (req, user) = extract_and_insert_authuser(state, req).await?;

    if user.role() != role {
        tracing::debug!(
            user = user.id(),
            role = %user.role(),
            required = %role,
            "Role gate refused"
        );
        return Err(PortalError::Forbidden);
    }

    Ok(next.run(req).await)
}

pub async fn allow_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, PortalError> {
    allow_role(&state, req, next, Role::Admin).await
}

pub async fn allow_teacher(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, PortalError> {
    allow_role(&state, req, next, Role::Teacher).await
}

pub async fn allow_student(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, PortalError> {
    allow_role(&state, req, next, Role::Student).await
}
