use chrono::NaiveTime;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, Set};
use serde::{Deserialize, Serialize};

use super::subject;
use super::time_slot::{self, Day};

/// One subject occupying one weekly slot for one class.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "timetables")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub time_slot_id: i64,
    pub room_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id",
        on_delete = "Cascade"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id",
        on_delete = "Cascade"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::time_slot::Entity",
        from = "Column::TimeSlotId",
        to = "super::time_slot::Column::Id",
        on_delete = "Cascade"
    )]
    TimeSlot,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::time_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeSlot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A rendered timetable cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableEntry {
    pub id: i64,
    pub subject_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub room_number: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// All entries of one day, ordered by start time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySchedule {
    pub day: Day,
    pub entries: Vec<TimetableEntry>,
}

/// Six empty days, monday first.
pub fn empty_week() -> Vec<DaySchedule> {
    Day::ALL
        .iter()
        .map(|day| DaySchedule {
            day: *day,
            entries: Vec::new(),
        })
        .collect()
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        class_id: i64,
        subject_id: i64,
        time_slot_id: i64,
        room_number: &str,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            class_id: Set(class_id),
            subject_id: Set(subject_id),
            time_slot_id: Set(time_slot_id),
            room_number: Set(room_number.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// The class timetable grouped monday..saturday. Days without entries are
    /// still present.
    pub async fn weekly_for_class<C: ConnectionTrait>(
        db: &C,
        class_id: i64,
    ) -> Result<Vec<DaySchedule>, DbErr> {
        let rows = Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .find_also_related(time_slot::Entity)
            .all(db)
            .await?;

        let subject_ids: Vec<i64> = rows.iter().map(|(t, _)| t.subject_id).collect();
        let labels = subject::Model::course_labels(db, &subject_ids).await?;

        let mut slotted: Vec<(time_slot::Model, TimetableEntry)> = rows
            .into_iter()
            .filter_map(|(entry, slot)| {
                let slot = slot?;
                let label = labels.get(&entry.subject_id)?;
                let cell = TimetableEntry {
                    id: entry.id,
                    subject_id: entry.subject_id,
                    course_code: label.code.clone(),
                    course_name: label.name.clone(),
                    room_number: entry.room_number,
                    start_time: slot.start_time,
                    end_time: slot.end_time,
                };
                Some((slot, cell))
            })
            .collect();
        slotted.sort_by_key(|(slot, _)| slot.sort_key());

        let mut week = empty_week();
        for (slot, cell) in slotted {
            if let Some(day) = week.iter_mut().find(|d| d.day == slot.day) {
                day.entries.push(cell);
            }
        }
        Ok(week)
    }
}
