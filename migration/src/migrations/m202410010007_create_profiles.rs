use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202410010007_create_profiles"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // students
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("students"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("user_id")).big_integer().not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("roll_number")).string_len(20).not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("admission_number")).string_len(20).not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("class_id")).big_integer().null())
                    .col(ColumnDef::new(Alias::new("department_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("admission_date")).date().not_null())
                    .col(ColumnDef::new(Alias::new("guardian_name")).string_len(100).not_null())
                    .col(ColumnDef::new(Alias::new("guardian_phone")).string_len(15).not_null())
                    .col(ColumnDef::new(Alias::new("guardian_email")).string().not_null().default(""))
                    .col(ColumnDef::new(Alias::new("guardian_address")).text().not_null())
                    .col(ColumnDef::new(Alias::new("emergency_contact")).string_len(15).not_null())
                    .col(ColumnDef::new(Alias::new("blood_group")).string_len(5).not_null().default(""))
                    .col(ColumnDef::new(Alias::new("medical_conditions")).text().not_null().default(""))
                    .col(ColumnDef::new(Alias::new("is_active")).boolean().not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_user")
                            .from(Alias::new("students"), Alias::new("user_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_class")
                            .from(Alias::new("students"), Alias::new("class_id"))
                            .to(Alias::new("classes"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_department")
                            .from(Alias::new("students"), Alias::new("department_id"))
                            .to(Alias::new("departments"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // teachers
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("teachers"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("user_id")).big_integer().not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("employee_id")).string_len(20).not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("department_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("designation")).string_len(100).not_null())
                    .col(ColumnDef::new(Alias::new("qualification")).string_len(20).not_null())
                    .col(ColumnDef::new(Alias::new("specialization")).string_len(200).not_null().default(""))
                    .col(ColumnDef::new(Alias::new("experience_years")).integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("employment_type")).string_len(20).not_null())
                    .col(ColumnDef::new(Alias::new("joining_date")).date().not_null())
                    .col(ColumnDef::new(Alias::new("salary_cents")).big_integer().null())
                    .col(ColumnDef::new(Alias::new("office_room")).string_len(50).not_null().default(""))
                    .col(ColumnDef::new(Alias::new("office_hours")).string_len(100).not_null().default(""))
                    .col(ColumnDef::new(Alias::new("research_interests")).text().not_null().default(""))
                    .col(ColumnDef::new(Alias::new("publications")).text().not_null().default(""))
                    .col(ColumnDef::new(Alias::new("is_active")).boolean().not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachers_user")
                            .from(Alias::new("teachers"), Alias::new("user_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachers_department")
                            .from(Alias::new("teachers"), Alias::new("department_id"))
                            .to(Alias::new("departments"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("teachers")).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new("students")).to_owned())
            .await
    }
}
