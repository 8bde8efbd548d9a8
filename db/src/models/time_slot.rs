use chrono::NaiveTime;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "time_slots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub day: Day,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Teaching day. Declaration order is the weekly order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Day {
    #[sea_orm(string_value = "monday")]
    Monday,
    #[sea_orm(string_value = "tuesday")]
    Tuesday,
    #[sea_orm(string_value = "wednesday")]
    Wednesday,
    #[sea_orm(string_value = "thursday")]
    Thursday,
    #[sea_orm(string_value = "friday")]
    Friday,
    #[sea_orm(string_value = "saturday")]
    Saturday,
}

impl Day {
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::timetable::Entity")]
    Timetable,
}

impl Related<super::timetable::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timetable.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        day: Day,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Model, DbErr> {
        if end_time <= start_time {
            return Err(DbErr::Custom("Slot must end after it starts".into()));
        }
        ActiveModel {
            day: Set(day),
            start_time: Set(start_time),
            end_time: Set(end_time),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Sort key: day of week, then start time.
    pub fn sort_key(&self) -> (Day, NaiveTime) {
        (self.day, self.start_time)
    }

    /// All slots in weekly order.
    pub async fn all_ordered<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        let mut slots = Entity::find().all(db).await?;
        slots.sort_by_key(Model::sort_key);
        Ok(slots)
    }
}
