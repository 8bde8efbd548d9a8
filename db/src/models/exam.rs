use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{exam_result, subject};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub exam_type: ExamType,
    pub subject_id: i64,
    /// Scheduled start.
    pub date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub total_marks: i32,
    pub pass_marks: i32,
    pub instructions: String,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
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
pub enum ExamType {
    #[sea_orm(string_value = "midterm")]
    Midterm,
    #[sea_orm(string_value = "final")]
    Final,
    #[sea_orm(string_value = "quiz")]
    Quiz,
    #[sea_orm(string_value = "assignment")]
    Assignment,
    #[sea_orm(string_value = "project")]
    Project,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id",
        on_delete = "Cascade"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    CreatedBy,
    #[sea_orm(has_many = "super::exam_result::Entity")]
    ExamResult,
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl Related<super::exam_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Input for [`Model::create`].
#[derive(Debug, Clone)]
pub struct NewExam {
    pub name: String,
    pub exam_type: ExamType,
    pub subject_id: i64,
    pub date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub total_marks: i32,
    pub pass_marks: i32,
    pub instructions: String,
    pub created_by: Option<i64>,
}

/// Which side of "now" to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// `date >= now`, soonest first.
    Upcoming,
    /// `date < now`, most recent first.
    Past,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(db: &C, new: NewExam) -> Result<Model, DbErr> {
        ActiveModel {
            name: Set(new.name),
            exam_type: Set(new.exam_type),
            subject_id: Set(new.subject_id),
            date: Set(new.date),
            duration_minutes: Set(new.duration_minutes),
            total_marks: Set(new.total_marks),
            pass_marks: Set(new.pass_marks),
            instructions: Set(new.instructions),
            created_by: Set(new.created_by),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Exams of every subject taught to `class_id`.
    pub async fn for_class<C: ConnectionTrait>(
        db: &C,
        class_id: i64,
        now: DateTime<Utc>,
        schedule: Schedule,
        limit: Option<u64>,
    ) -> Result<Vec<Model>, DbErr> {
        let query = Entity::find()
            .inner_join(subject::Entity)
            .filter(subject::Column::ClassId.eq(class_id));

        let query = match schedule {
            Schedule::Upcoming => query
                .filter(Column::Date.gte(now))
                .order_by_asc(Column::Date),
            Schedule::Past => query
                .filter(Column::Date.lt(now))
                .order_by_desc(Column::Date),
        };

        match limit {
            Some(n) => query.limit(n).all(db).await,
            None => query.all(db).await,
        }
    }

    /// Changes the marking scheme and regrades every result of the exam in
    /// one transaction.
    pub async fn update_marks(
        db: &DatabaseConnection,
        id: i64,
        total_marks: i32,
        pass_marks: i32,
    ) -> Result<Model, DbErr> {
        let txn = db.begin().await?;

        let exam = Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Exam {id} not found")))?;

        let mut active: ActiveModel = exam.into();
        active.total_marks = Set(total_marks);
        active.pass_marks = Set(pass_marks);
        let exam = active.update(&txn).await?;

        let regraded = exam_result::Model::regrade_exam(&txn, id).await?;
        txn.commit().await?;

        tracing::info!(exam_id = id, total_marks, regraded, "Exam marking scheme updated");
        Ok(exam)
    }
}
