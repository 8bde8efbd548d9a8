use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::fee::to_cents;

/// Teacher profile, one-to-one with a `teacher` user.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub employee_id: String,
    pub department_id: i64,
    pub designation: String,
    pub qualification: Qualification,
    pub specialization: String,
    pub experience_years: i32,
    pub employment_type: EmploymentType,
    pub joining_date: NaiveDate,
    #[serde(skip)]
    pub salary_cents: Option<i64>,
    pub office_room: String,
    pub office_hours: String,
    pub research_interests: String,
    pub publications: String,
    pub is_active: bool,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Qualification {
    #[sea_orm(string_value = "bachelor")]
    Bachelor,
    #[sea_orm(string_value = "master")]
    Master,
    #[sea_orm(string_value = "phd")]
    Phd,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum EmploymentType {
    #[sea_orm(string_value = "permanent")]
    Permanent,
    #[sea_orm(string_value = "contract")]
    Contract,
    #[sea_orm(string_value = "visiting")]
    Visiting,
    #[sea_orm(string_value = "guest")]
    Guest,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_delete = "Cascade"
    )]
    Department,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Input for [`Model::create`].
#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub user_id: i64,
    pub employee_id: String,
    pub department_id: i64,
    pub designation: String,
    pub qualification: Qualification,
    pub specialization: String,
    pub experience_years: i32,
    pub employment_type: EmploymentType,
    pub joining_date: NaiveDate,
    pub salary: Option<Decimal>,
    pub office_room: String,
    pub office_hours: String,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(db: &C, new: NewTeacher) -> Result<Model, DbErr> {
        let salary_cents = new.salary.map(to_cents).transpose()?;
        ActiveModel {
            user_id: Set(new.user_id),
            employee_id: Set(new.employee_id),
            department_id: Set(new.department_id),
            designation: Set(new.designation),
            qualification: Set(new.qualification),
            specialization: Set(new.specialization),
            experience_years: Set(new.experience_years),
            employment_type: Set(new.employment_type),
            joining_date: Set(new.joining_date),
            salary_cents: Set(salary_cents),
            office_room: Set(new.office_room),
            office_hours: Set(new.office_hours),
            research_interests: Set(String::new()),
            publications: Set(String::new()),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_user<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    pub async fn find_by_employee_id<C: ConnectionTrait>(
        db: &C,
        employee_id: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .one(db)
            .await
    }

    pub fn salary(&self) -> Option<Decimal> {
        self.salary_cents.map(|c| Decimal::new(c, 2))
    }
}
