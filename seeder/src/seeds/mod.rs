pub mod class;
pub mod course;
pub mod department;
pub mod student;
pub mod teacher;
pub mod user;

use db::models;
use sea_orm::{DatabaseConnection, DbErr};

pub(crate) async fn require_department(
    db: &DatabaseConnection,
    code: &str,
) -> Result<models::department::Model, DbErr> {
    models::department::Model::find_by_code(db, code)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Department {code} has not been seeded")))
}

pub(crate) async fn require_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<models::user::Model, DbErr> {
    models::user::Model::find_by_username(db, username)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("User {username} has not been seeded")))
}
