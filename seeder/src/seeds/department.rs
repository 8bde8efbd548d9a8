use crate::seed::Seeder;
use db::models::department::Model;
use sea_orm::{DatabaseConnection, DbErr};

pub struct DepartmentSeeder;

const DEPARTMENTS: [(&str, &str, &str); 2] = [
    ("Computer Science", "CS", "Department of Computer Science"),
    ("Mathematics", "MATH", "Department of Mathematics"),
];

#[async_trait::async_trait]
impl Seeder for DepartmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        for (name, code, description) in DEPARTMENTS {
            if Model::find_by_code(db, code).await?.is_none() {
                Model::create(db, name, code, None, description).await?;
            }
        }
        Ok(())
    }
}
