use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202410010004_create_classes"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("classes"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("name")).string_len(50).not_null())
                    .col(ColumnDef::new(Alias::new("department_id")).big_integer().not_null())
                    .col(
                        ColumnDef::new(Alias::new("semester"))
                            .integer()
                            .not_null()
                            .check(Expr::col(Alias::new("semester")).between(1, 8)),
                    )
                    .col(ColumnDef::new(Alias::new("section")).string_len(10).not_null().default("A"))
                    .col(ColumnDef::new(Alias::new("academic_year")).string_len(9).not_null())
                    .col(ColumnDef::new(Alias::new("class_teacher_id")).big_integer().null())
                    .col(ColumnDef::new(Alias::new("max_strength")).integer().not_null().default(60))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classes_department")
                            .from(Alias::new("classes"), Alias::new("department_id"))
                            .to(Alias::new("departments"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classes_class_teacher")
                            .from(Alias::new("classes"), Alias::new("class_teacher_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_classes_dept_sem_section_year")
                    .table(Alias::new("classes"))
                    .col(Alias::new("department_id"))
                    .col(Alias::new("semester"))
                    .col(Alias::new("section"))
                    .col(Alias::new("academic_year"))
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("classes")).to_owned())
            .await
    }
}
