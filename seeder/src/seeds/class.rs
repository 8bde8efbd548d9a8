use crate::seed::Seeder;
use crate::seeds::{require_department, require_user};
use db::models::class::{Column, Entity, Model, NewClass};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct ClassSeeder;

pub const DEMO_CLASS: &str = "CS Semester 1 A";

#[async_trait::async_trait]
impl Seeder for ClassSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let cs = require_department(db, "CS").await?;
        let existing = Entity::find()
            .filter(Column::DepartmentId.eq(cs.id))
            .filter(Column::Name.eq(DEMO_CLASS))
            .one(db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        let teacher = require_user(db, "teacher1").await?;
        let mut class = NewClass::new(DEMO_CLASS, cs.id, 1, "2024-2025");
        class.class_teacher_id = Some(teacher.id);
        Model::create(db, class).await?;
        Ok(())
    }
}
