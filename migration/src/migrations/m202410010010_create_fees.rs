use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202410010010_create_fees"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("fees"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("student_id")).big_integer().not_null())
                    .col(ColumnDef::new(Alias::new("fee_type")).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Alias::new("amount_cents"))
                            .big_integer()
                            .not_null()
                            .check(Expr::col(Alias::new("amount_cents")).gte(0)),
                    )
                    .col(ColumnDef::new(Alias::new("due_date")).date().not_null())
                    .col(ColumnDef::new(Alias::new("payment_status")).string_len(10).not_null().default("pending"))
                    .col(ColumnDef::new(Alias::new("payment_date")).date().null())
                    .col(ColumnDef::new(Alias::new("payment_method")).string_len(50).not_null().default(""))
                    .col(ColumnDef::new(Alias::new("transaction_id")).string_len(100).not_null().default(""))
                    .col(ColumnDef::new(Alias::new("remarks")).text().not_null().default(""))
                    .col(ColumnDef::new(Alias::new("academic_year")).string_len(9).not_null())
                    .col(
                        ColumnDef::new(Alias::new("semester"))
                            .integer()
                            .not_null()
                            .check(Expr::col(Alias::new("semester")).between(1, 8)),
                    )
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fees_student")
                            .from(Alias::new("fees"), Alias::new("student_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("fees")).to_owned())
            .await
    }
}
