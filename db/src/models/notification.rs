//! Broadcast and targeted messages.
//!
//! Who may see a notification is decided by its audience selector. The same
//! rule exists twice: [`Model::is_visible_to`] for a loaded row and
//! [`visibility_condition`] for the query that loads them.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryFilter, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::student;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub target_audience: Audience,
    pub target_class_id: Option<i64>,
    pub target_department_id: Option<i64>,
    /// Student profile id for `individual` notifications.
    pub target_student_id: Option<i64>,
    pub is_urgent: bool,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
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
pub enum NotificationType {
    #[sea_orm(string_value = "general")]
    General,
    #[sea_orm(string_value = "academic")]
    Academic,
    #[sea_orm(string_value = "exam")]
    Exam,
    #[sea_orm(string_value = "fee")]
    Fee,
    #[sea_orm(string_value = "event")]
    Event,
}

/// Audience selector.
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
pub enum Audience {
    #[sea_orm(string_value = "all")]
    All,
    #[sea_orm(string_value = "class")]
    Class,
    #[sea_orm(string_value = "department")]
    Department,
    #[sea_orm(string_value = "individual")]
    Individual,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::TargetClassId",
        to = "super::class::Column::Id",
        on_delete = "Cascade"
    )]
    TargetClass,
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::TargetDepartmentId",
        to = "super::department::Column::Id",
        on_delete = "Cascade"
    )]
    TargetDepartment,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::TargetStudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    TargetStudent,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    CreatedBy,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The parts of a student that audience selectors match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub student_id: i64,
    pub class_id: Option<i64>,
    pub department_id: i64,
}

impl From<&student::Model> for Viewer {
    fn from(student: &student::Model) -> Self {
        Self {
            student_id: student.id,
            class_id: student.class_id,
            department_id: student.department_id,
        }
    }
}

/// Input for [`Model::create`]. The target matching the audience must be set.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub target_audience: Audience,
    pub target_class_id: Option<i64>,
    pub target_department_id: Option<i64>,
    pub target_student_id: Option<i64>,
    pub is_urgent: bool,
    pub created_by: i64,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewNotification {
    /// A non-urgent general notification for everyone.
    pub fn broadcast(title: &str, message: &str, created_by: i64) -> Self {
        Self {
            title: title.to_owned(),
            message: message.to_owned(),
            notification_type: NotificationType::General,
            target_audience: Audience::All,
            target_class_id: None,
            target_department_id: None,
            target_student_id: None,
            is_urgent: false,
            created_by,
            expires_at: None,
        }
    }

    fn check_target(&self) -> Result<(), DbErr> {
        let missing = match self.target_audience {
            Audience::All => None,
            Audience::Class => self.target_class_id.is_none().then_some("target_class_id"),
            Audience::Department => self
                .target_department_id
                .is_none()
                .then_some("target_department_id"),
            Audience::Individual => self
                .target_student_id
                .is_none()
                .then_some("target_student_id"),
        };
        match missing {
            Some(field) => Err(DbErr::Custom(format!(
                "{field} is required for audience '{}'",
                self.target_audience
            ))),
            None => Ok(()),
        }
    }
}

/// SQL form of [`Model::is_visible_to`].
pub fn visibility_condition(viewer: &Viewer, now: DateTime<Utc>) -> Condition {
    let mut audience = Condition::any()
        .add(Column::TargetAudience.eq(Audience::All))
        .add(
            Condition::all()
                .add(Column::TargetAudience.eq(Audience::Department))
                .add(Column::TargetDepartmentId.eq(viewer.department_id)),
        )
        .add(
            Condition::all()
                .add(Column::TargetAudience.eq(Audience::Individual))
                .add(Column::TargetStudentId.eq(viewer.student_id)),
        );
    if let Some(class_id) = viewer.class_id {
        audience = audience.add(
            Condition::all()
                .add(Column::TargetAudience.eq(Audience::Class))
                .add(Column::TargetClassId.eq(class_id)),
        );
    }

    let live = Condition::any()
        .add(Column::ExpiresAt.is_null())
        .add(Column::ExpiresAt.gt(now));

    Condition::all().add(audience).add(live)
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        new: NewNotification,
    ) -> Result<Model, DbErr> {
        new.check_target()?;
        ActiveModel {
            title: Set(new.title),
            message: Set(new.message),
            notification_type: Set(new.notification_type),
            target_audience: Set(new.target_audience),
            target_class_id: Set(new.target_class_id),
            target_department_id: Set(new.target_department_id),
            target_student_id: Set(new.target_student_id),
            is_urgent: Set(new.is_urgent),
            created_by: Set(new.created_by),
            created_at: Set(Utc::now()),
            expires_at: Set(new.expires_at),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    pub fn is_visible_to(&self, viewer: &Viewer, now: DateTime<Utc>) -> bool {
        if self.is_expired(now) {
            return false;
        }
        match self.target_audience {
            Audience::All => true,
            Audience::Class => {
                viewer.class_id.is_some() && self.target_class_id == viewer.class_id
            }
            Audience::Department => self.target_department_id == Some(viewer.department_id),
            Audience::Individual => self.target_student_id == Some(viewer.student_id),
        }
    }

    /// Notifications the viewer may see, most recent first.
    pub async fn visible_to<C: ConnectionTrait>(
        db: &C,
        viewer: &Viewer,
        now: DateTime<Utc>,
        limit: Option<u64>,
    ) -> Result<Vec<Model>, DbErr> {
        let query = Entity::find()
            .filter(visibility_condition(viewer, now))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        match limit {
            Some(n) => query.limit(n).all(db).await,
            None => query.all(db).await,
        }
    }
}
