use crate::seed::Seeder;
use crate::seeds::require_department;
use db::models::course::Model;
use sea_orm::{DatabaseConnection, DbErr};

pub struct CourseSeeder;

const COURSES: [(&str, &str, &str, i32, i32, &str); 2] = [
    (
        "Programming Fundamentals",
        "CS101",
        "CS",
        1,
        4,
        "Introduction to programming concepts",
    ),
    (
        "Mathematics I",
        "MATH101",
        "MATH",
        1,
        3,
        "Basic mathematics for engineering",
    ),
];

#[async_trait::async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        for (name, code, department, semester, credits, description) in COURSES {
            if Model::find_by_code(db, code).await?.is_some() {
                continue;
            }
            let department = require_department(db, department).await?;
            Model::create(db, name, code, department.id, semester, credits, description).await?;
        }
        Ok(())
    }
}
