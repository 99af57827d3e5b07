// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// マイグレーションモジュール
mod m20240101_000001_create_expenses_table;
mod m20240101_000002_add_expense_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成
            Box::new(m20240101_000001_create_expenses_table::Migration),
            // 2. 一覧取得（作成日の降順）用のインデックス
            Box::new(m20240101_000002_add_expense_indexes::Migration),
        ]
    }
}
