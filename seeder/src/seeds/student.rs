use crate::seed::Seeder;
use crate::seeds::class::DEMO_CLASS;
use crate::seeds::{require_department, require_user};
use chrono::NaiveDate;
use db::models::class;
use db::models::student::{Model, NewStudent};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct StudentProfileSeeder;

#[async_trait::async_trait]
impl Seeder for StudentProfileSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        if Model::find_by_roll_number(db, "CS001").await?.is_some() {
            return Ok(());
        }
        let user = require_user(db, "student1").await?;
        let cs = require_department(db, "CS").await?;
        let class = class::Entity::find()
            .filter(class::Column::DepartmentId.eq(cs.id))
            .filter(class::Column::Name.eq(DEMO_CLASS))
            .one(db)
            .await?;
        let admission_date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .ok_or_else(|| DbErr::Custom("invalid admission date".into()))?;

        Model::create(
            db,
            NewStudent {
                user_id: user.id,
                roll_number: "CS001".into(),
                admission_number: "ADM2024001".into(),
                class_id: class.map(|c| c.id),
                department_id: cs.id,
                admission_date,
                guardian_name: "Mr. Robert Smith".into(),
                guardian_phone: "1234567890".into(),
                guardian_email: "guardian@email.com".into(),
                guardian_address: "123 Main Street, City, State".into(),
                emergency_contact: "0987654321".into(),
                blood_group: "O+".into(),
                medical_conditions: String::new(),
            },
        )
        .await?;
        Ok(())
    }
}
