use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // created_at カラムにインデックスを追加（新しい順の一覧取得用）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Expenses::Table)
                    .name("idx_expenses_created_at")
                    .col(Expenses::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Expenses::Table)
                    .name("idx_expenses_created_at")
                    .to_owned(),
            )
            .await
    }
}

/// Reference to the expenses table
#[derive(DeriveIden)]
enum Expenses {
    Table,
    CreatedAt,
}
