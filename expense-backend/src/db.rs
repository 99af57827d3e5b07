// src/db.rs
use crate::config::Config;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use std::time::Duration;

pub type DbPool = DatabaseConnection;

fn connect_options(config: &Config) -> ConnectOptions {
    let mut opt = ConnectOptions::new(config.database_url.clone());

    // 接続オプションを設定
    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8 * 60));

    opt
}

pub async fn create_db_pool(config: &Config) -> Result<DbPool, DbErr> {
    Database::connect(connect_options(config)).await
}

// スキーマを search_path に指定して接続するバージョン
pub async fn create_db_pool_with_schema(config: &Config, schema: &str) -> Result<DbPool, DbErr> {
    let mut opt = connect_options(config);
    opt.set_schema_search_path(schema.to_string());

    Database::connect(opt).await
}

// スキーマが存在するか確認するヘルパー関数
pub async fn schema_exists(conn: &DbPool, schema: &str) -> Result<bool, DbErr> {
    let result_opt = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "SELECT EXISTS (SELECT 1 FROM information_schema.schemata WHERE schema_name = $1) AS exists",
            [schema.into()],
        ))
        .await?;

    // 結果が存在すれば処理、なければfalseを返す
    match result_opt {
        Some(result) => result.try_get("", "exists"),
        None => Ok(false),
    }
}

// スキーマを作成するヘルパー関数
pub async fn create_schema(conn: &DbPool, schema: &str) -> Result<(), DbErr> {
    // 識別子はパラメータ化できないため、ダブルクォートをエスケープして埋め込む
    let create_schema = format!(
        "CREATE SCHEMA IF NOT EXISTS {};",
        quote_identifier(schema)
    );
    conn.execute(Statement::from_string(
        DatabaseBackend::Postgres,
        create_schema,
    ))
    .await?;
    Ok(())
}

fn quote_identifier(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
