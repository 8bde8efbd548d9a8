use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::TypedHeader;
use db::models::{
    student, teacher,
    user::{self, Role},
};
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use sea_orm::EntityTrait;
use util::{config, state::AppState};

use crate::auth::claims::{AuthUser, Claims};
use crate::auth::error::PortalError;

/// Extracts `AuthUser` from a guard-populated extension or, failing that,
/// from the `Authorization: Bearer` header.
///
/// # Errors
/// - `401 Unauthorized` if the header is missing or malformed, or the token is
///   invalid or expired.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = PortalError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    PortalError::Unauthenticated("Missing or invalid Authorization header".into())
                })?;

        let token_data = decode::<Claims>(
            bearer.token(),
            &DecodingKey::from_secret(config::jwt_secret().as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| PortalError::Unauthenticated("Invalid or expired token".into()))?;

        Ok(AuthUser(token_data.claims))
    }
}

/// Loads the account behind `claims`, rejecting removed and deactivated accounts.
pub(crate) async fn load_user(
    state: &AppState,
    claims: &Claims,
) -> Result<user::Model, PortalError> {
    let user = user::Entity::find_by_id(claims.sub)
        .one(state.db())
        .await?
        .ok_or_else(|| PortalError::Unauthenticated("Account no longer exists".into()))?;

    if !user.is_active {
        return Err(PortalError::Unauthenticated("Account is inactive".into()));
    }
    Ok(user)
}

/// A caller on the student portal: their account and student profile.
#[derive(Debug, Clone)]
pub struct StudentContext {
    pub user: user::Model,
    pub student: student::Model,
}

impl FromRequestParts<AppState> for StudentContext {
    type Rejection = PortalError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;
        if claims.role != Role::Student {
            return Err(PortalError::Forbidden);
        }

        let user = load_user(state, &claims).await?;
        let student = student::Model::find_by_user(state.db(), user.id)
            .await?
            .ok_or(PortalError::StudentProfileMissing)?;

        Ok(Self { user, student })
    }
}

/// A caller on the teacher portal: their account and teacher profile.
#[derive(Debug, Clone)]
pub struct TeacherContext {
    pub user: user::Model,
    pub teacher: teacher::Model,
}

impl FromRequestParts<AppState> for TeacherContext {
    type Rejection = PortalError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;
        if claims.role != Role::Teacher {
            return Err(PortalError::Forbidden);
        }

        let user = load_user(state, &claims).await?;
        let teacher = teacher::Model::find_by_user(state.db(), user.id)
            .await?
            .ok_or(PortalError::TeacherProfileMissing)?;

        Ok(Self { user, teacher })
    }
}
