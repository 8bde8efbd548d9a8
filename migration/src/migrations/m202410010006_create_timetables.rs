use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202410010006_create_timetables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // time_slots
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("time_slots"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("day")).string_len(10).not_null())
                    .col(ColumnDef::new(Alias::new("start_time")).time().not_null())
                    .col(ColumnDef::new(Alias::new("end_time")).time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_time_slots_day_start_end")
                    .table(Alias::new("time_slots"))
                    .col(Alias::new("day"))
                    .col(Alias::new("start_time"))
                    .col(Alias::new("end_time"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        // timetables
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("timetables"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("class_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("subject_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("time_slot_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("room_number")).string_len(20).not_null().default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetables_class")
                            .from(Alias::new("timetables"), Alias::new("class_id"))
                            .to(Alias::new("classes"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetables_subject")
                            .from(Alias::new("timetables"), Alias::new("subject_id"))
                            .to(Alias::new("subjects"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetables_time_slot")
                            .from(Alias::new("timetables"), Alias::new("time_slot_id"))
                            .to(Alias::new("time_slots"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // one subject per class per slot
        manager
            .create_index(
                Index::create()
                    .name("ux_timetables_class_slot")
                    .table(Alias::new("timetables"))
                    .col(Alias::new("class_id"))
                    .col(Alias::new("time_slot_id"))
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("timetables")).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new("time_slots")).to_owned())
            .await
    }
}
