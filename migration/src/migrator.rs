use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202410010001_create_users::Migration),
            Box::new(migrations::m202410010002_create_departments::Migration),
            Box::new(migrations::m202410010003_create_courses::Migration),
            Box::new(migrations::m202410010004_create_classes::Migration),
            Box::new(migrations::m202410010005_create_subjects::Migration),
            Box::new(migrations::m202410010006_create_timetables::Migration),
            Box::new(migrations::m202410010007_create_profiles::Migration),
            Box::new(migrations::m202410010008_create_attendance::Migration),
            Box::new(migrations::m202410010009_create_exams::Migration),
            Box::new(migrations::m202410010010_create_fees::Migration),
            Box::new(migrations::m202410010011_create_notifications::Migration),
        ]
    }
}
