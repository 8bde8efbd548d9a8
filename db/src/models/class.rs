use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// A cohort of students: one section of one semester of a department in one
/// academic year.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub department_id: i64,
    pub semester: i32,
    pub section: String,
    /// e.g. `2024-2025`
    pub academic_year: String,
    pub class_teacher_id: Option<i64>,
    pub max_strength: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_delete = "Cascade"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ClassTeacherId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    ClassTeacher,
    #[sea_orm(has_many = "super::subject::Entity")]
    Subject,
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassTeacher.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Input for [`Model::create`].
#[derive(Debug, Clone)]
pub struct NewClass {
    pub name: String,
    pub department_id: i64,
    pub semester: i32,
    pub section: String,
    pub academic_year: String,
    pub class_teacher_id: Option<i64>,
    pub max_strength: i32,
}

impl NewClass {
    /// Section `A`, 60 seats, no class teacher.
    pub fn new(name: &str, department_id: i64, semester: i32, academic_year: &str) -> Self {
        Self {
            name: name.to_owned(),
            department_id,
            semester,
            section: "A".to_owned(),
            academic_year: academic_year.to_owned(),
            class_teacher_id: None,
            max_strength: 60,
        }
    }
}

impl Model {
    pub async fn create<C: ConnectionTrait>(db: &C, new: NewClass) -> Result<Model, DbErr> {
        ActiveModel {
            name: Set(new.name),
            department_id: Set(new.department_id),
            semester: Set(new.semester),
            section: Set(new.section),
            academic_year: Set(new.academic_year),
            class_teacher_id: Set(new.class_teacher_id),
            max_strength: Set(new.max_strength),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}
