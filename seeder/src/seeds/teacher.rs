use crate::seed::Seeder;
use crate::seeds::{require_department, require_user};
use chrono::NaiveDate;
use db::models::teacher::{EmploymentType, Model, NewTeacher, Qualification};
use sea_orm::{DatabaseConnection, DbErr};

pub struct TeacherProfileSeeder;

#[async_trait::async_trait]
impl Seeder for TeacherProfileSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        if Model::find_by_employee_id(db, "EMP001").await?.is_some() {
            return Ok(());
        }
        let user = require_user(db, "teacher1").await?;
        let cs = require_department(db, "CS").await?;
        let joining_date = NaiveDate::from_ymd_opt(2020, 1, 1)
            .ok_or_else(|| DbErr::Custom("invalid joining date".into()))?;

        Model::create(
            db,
            NewTeacher {
                user_id: user.id,
                employee_id: "EMP001".into(),
                department_id: cs.id,
                designation: "Assistant Professor".into(),
                qualification: Qualification::Master,
                specialization: "Software Engineering".into(),
                experience_years: 5,
                employment_type: EmploymentType::Permanent,
                joining_date,
                salary: None,
                office_room: String::new(),
                office_hours: String::new(),
            },
        )
        .await?;
        Ok(())
    }
}
