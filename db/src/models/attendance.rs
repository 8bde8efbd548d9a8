use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::grade::{percentage, round1};

/// One student's presence in one subject on one date.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The student's user id.
    pub student_id: i64,
    pub subject_id: i64,
    pub date: NaiveDate,
    pub is_present: bool,
    pub remarks: String,
    pub marked_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id",
        on_delete = "Cascade"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::MarkedBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    MarkedBy,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Present/absent counts and the derived percentage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AttendanceSummary {
    pub total: u64,
    pub present: u64,
    pub absent: u64,
    /// Rounded to one decimal. 0 when there are no records.
    pub percentage: f64,
}

impl AttendanceSummary {
    pub fn from_counts(total: u64, present: u64) -> Self {
        Self {
            total,
            present,
            absent: total.saturating_sub(present),
            percentage: attendance_percentage(present, total),
        }
    }

    /// Tallies a slice of records.
    pub fn from_records(records: &[Model]) -> Self {
        let present = records.iter().filter(|r| r.is_present).count() as u64;
        Self::from_counts(records.len() as u64, present)
    }
}

/// `present / total * 100` rounded to one decimal, 0 for no records.
pub fn attendance_percentage(present: u64, total: u64) -> f64 {
    round1(percentage(present as f64, total as f64))
}

impl Model {
    /// Records a student's attendance. A second mark for the same
    /// student, subject and date is rejected by the unique index.
    pub async fn mark<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        subject_id: i64,
        date: NaiveDate,
        is_present: bool,
        marked_by: Option<i64>,
        remarks: &str,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            student_id: Set(student_id),
            subject_id: Set(subject_id),
            date: Set(date),
            is_present: Set(is_present),
            remarks: Set(remarks.to_owned()),
            marked_by: Set(marked_by),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// All records of a student, most recent date first.
    pub async fn for_student<C: ConnectionTrait>(
        db: &C,
        student_user_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_user_id))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    /// Overall summary for a student, optionally scoped to one subject.
    pub async fn summary<C: ConnectionTrait>(
        db: &C,
        student_user_id: i64,
        subject_id: Option<i64>,
    ) -> Result<AttendanceSummary, DbErr> {
        let mut base = Entity::find().filter(Column::StudentId.eq(student_user_id));
        if let Some(subject_id) = subject_id {
            base = base.filter(Column::SubjectId.eq(subject_id));
        }
        let total = base.clone().count(db).await?;
        let present = base.filter(Column::IsPresent.eq(true)).count(db).await?;
        Ok(AttendanceSummary::from_counts(total, present))
    }
}
