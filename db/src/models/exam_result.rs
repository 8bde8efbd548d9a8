use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, Set};
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

use super::exam;
use crate::grade::{Grade, grade_for};

/// A student's score on one exam. `grade` is maintained by the save hook.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The student's user id.
    pub student_id: i64,
    pub exam_id: i64,
    pub marks_obtained: Option<i32>,
    pub grade: Option<Grade>,
    pub remarks: String,
    /// Unpublished results are never shown to students.
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
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
        belongs_to = "super::exam::Entity",
        from = "Column::ExamId",
        to = "super::exam::Column::Id",
        on_delete = "Cascade"
    )]
    Exam,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

fn current<T>(value: &ActiveValue<T>) -> Option<T>
where
    T: Into<Value> + Clone,
{
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v.clone()),
        ActiveValue::NotSet => None,
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Recomputes the grade from the marks and the exam's total on every write.
    async fn before_save<C>(mut self, db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let stored = match current(&self.id) {
            Some(id)
                if !insert && (self.marks_obtained.is_not_set() || self.exam_id.is_not_set()) =>
            {
                Entity::find_by_id(id).one(db).await?
            }
            _ => None,
        };

        let marks = current(&self.marks_obtained)
            .or_else(|| stored.as_ref().map(|s| s.marks_obtained))
            .flatten();
        let exam_id = current(&self.exam_id)
            .or_else(|| stored.as_ref().map(|s| s.exam_id))
            .ok_or_else(|| DbErr::Custom("Result is not attached to an exam".into()))?;

        let total = exam::Entity::find_by_id(exam_id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Exam {exam_id} not found")))?
            .total_marks;

        let now = Utc::now();
        self.grade = Set(grade_for(marks, total));
        self.updated_at = Set(now);
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(now);
        }
        Ok(self)
    }
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        student_id: i64,
        exam_id: i64,
        marks_obtained: Option<i32>,
        remarks: &str,
        is_published: bool,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            student_id: Set(student_id),
            exam_id: Set(exam_id),
            marks_obtained: Set(marks_obtained),
            remarks: Set(remarks.to_owned()),
            is_published: Set(is_published),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Enters (or clears) marks. The grade follows.
    pub async fn set_marks<C: ConnectionTrait>(
        db: &C,
        id: i64,
        marks_obtained: Option<i32>,
        remarks: Option<&str>,
    ) -> Result<Model, DbErr> {
        let result = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Result {id} not found")))?;

        let mut active: ActiveModel = result.into();
        active.marks_obtained = Set(marks_obtained);
        if let Some(remarks) = remarks {
            active.remarks = Set(remarks.to_owned());
        }
        active.update(db).await
    }

    pub async fn set_published<C: ConnectionTrait>(
        db: &C,
        id: i64,
        is_published: bool,
    ) -> Result<Model, DbErr> {
        let result = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Result {id} not found")))?;

        let mut active: ActiveModel = result.into();
        active.is_published = Set(is_published);
        active.update(db).await
    }

    /// Publishes or withdraws many results at once. Returns the number of rows
    /// touched. Grades are unaffected.
    pub async fn set_published_bulk<C: ConnectionTrait>(
        db: &C,
        ids: &[i64],
        is_published: bool,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }
        let res = Entity::update_many()
            .col_expr(Column::IsPublished, Expr::value(is_published))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.is_in(ids.iter().copied()))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Re-saves every result of an exam so stored grades match its current
    /// total. Returns how many were regraded.
    pub async fn regrade_exam<C: ConnectionTrait>(db: &C, exam_id: i64) -> Result<u64, DbErr> {
        let results = Entity::find()
            .filter(Column::ExamId.eq(exam_id))
            .all(db)
            .await?;

        let mut count = 0;
        for result in results {
            let marks = result.marks_obtained;
            let mut active: ActiveModel = result.into();
            active.marks_obtained = Set(marks);
            active.update(db).await?;
            count += 1;
        }
        Ok(count)
    }

    /// Published results of a student with their exams, most recent exam first.
    pub async fn published_for_student<C: ConnectionTrait>(
        db: &C,
        student_user_id: i64,
    ) -> Result<Vec<(Model, exam::Model)>, DbErr> {
        let rows = Entity::find()
            .filter(Column::StudentId.eq(student_user_id))
            .filter(Column::IsPublished.eq(true))
            .find_also_related(exam::Entity)
            .order_by_desc(exam::Column::Date)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(result, exam)| exam.map(|e| (result, e)))
            .collect())
    }

    /// `None` while marks are not entered.
    pub fn passed(&self, pass_marks: i32) -> Option<bool> {
        self.marks_obtained.map(|m| m >= pass_marks)
    }
}

/// Sum of obtained marks over sum of exam totals, rounded to one decimal.
/// Results without marks count as zero obtained. 0 when there is nothing.
pub fn overall_percentage(rows: &[(Model, exam::Model)]) -> f64 {
    let (obtained, total) = rows.iter().fold((0i64, 0i64), |(o, t), (r, e)| {
        (
            o + i64::from(r.marks_obtained.unwrap_or(0)),
            t + i64::from(e.total_marks),
        )
    });
    crate::grade::round1(crate::grade::percentage(obtained as f64, total as f64))
}
