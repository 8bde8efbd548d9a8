use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, Set};
use serde::{Deserialize, Serialize};

/// Student profile, one-to-one with a `student` user.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub roll_number: String,
    #[sea_orm(unique)]
    pub admission_number: String,
    /// Cleared when the class is deleted.
    pub class_id: Option<i64>,
    pub department_id: i64,
    pub admission_date: NaiveDate,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub guardian_email: String,
    pub guardian_address: String,
    pub emergency_contact: String,
    pub blood_group: String,
    pub medical_conditions: String,
    pub is_active: bool,
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
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id",
        on_delete = "SetNull"
    )]
    Class,
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

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Input for [`Model::create`]. Optional contact fields default to empty.
#[derive(Debug, Clone, Default)]
pub struct NewStudent {
    pub user_id: i64,
    pub roll_number: String,
    pub admission_number: String,
    pub class_id: Option<i64>,
    pub department_id: i64,
    pub admission_date: NaiveDate,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub guardian_email: String,
    pub guardian_address: String,
    pub emergency_contact: String,
    pub blood_group: String,
    pub medical_conditions: String,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(db: &C, new: NewStudent) -> Result<Model, DbErr> {
        ActiveModel {
            user_id: Set(new.user_id),
            roll_number: Set(new.roll_number),
            admission_number: Set(new.admission_number),
            class_id: Set(new.class_id),
            department_id: Set(new.department_id),
            admission_date: Set(new.admission_date),
            guardian_name: Set(new.guardian_name),
            guardian_phone: Set(new.guardian_phone),
            guardian_email: Set(new.guardian_email),
            guardian_address: Set(new.guardian_address),
            emergency_contact: Set(new.emergency_contact),
            blood_group: Set(new.blood_group),
            medical_conditions: Set(new.medical_conditions),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Profile attached to a user account, if any.
    pub async fn find_by_user<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    pub async fn find_by_roll_number<C: ConnectionTrait>(
        db: &C,
        roll_number: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::RollNumber.eq(roll_number))
            .one(db)
            .await
    }
}
