use std::collections::HashMap;

use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use super::course;

/// A course as taught to one class, optionally by one teacher.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub class_id: i64,
    pub teacher_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id",
        on_delete = "Cascade"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TeacherId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Teacher,
    #[sea_orm(has_many = "super::exam::Entity")]
    Exam,
    #[sea_orm(has_many = "super::timetable::Entity")]
    Timetable,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl Related<super::timetable::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timetable.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Course code and name for a subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseLabel {
    pub code: String,
    pub name: String,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        course_id: i64,
        class_id: i64,
        teacher_id: Option<i64>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            course_id: Set(course_id),
            class_id: Set(class_id),
            teacher_id: Set(teacher_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Subjects of a class with their courses, ordered by course code.
    pub async fn for_class<C: ConnectionTrait>(
        db: &C,
        class_id: i64,
    ) -> Result<Vec<(Model, course::Model)>, DbErr> {
        let rows = Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .find_also_related(course::Entity)
            .order_by_asc(course::Column::Code)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(subject, course)| course.map(|c| (subject, c)))
            .collect())
    }

    /// Course labels keyed by subject id.
    pub async fn course_labels<C: ConnectionTrait>(
        db: &C,
        subject_ids: &[i64],
    ) -> Result<HashMap<i64, CourseLabel>, DbErr> {
        if subject_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Entity::find()
            .filter(Column::Id.is_in(subject_ids.iter().copied()))
            .find_also_related(course::Entity)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(subject, course)| {
                course.map(|c| {
                    (
                        subject.id,
                        CourseLabel {
                            code: c.code,
                            name: c.name,
                        },
                    )
                })
            })
            .collect())
    }
}
