// src/main.rs
use expense_backend::config::Config;
use expense_backend::db::{create_db_pool, create_db_pool_with_schema, create_schema, schema_exists};
use expense_backend::service::expense_service::ExpenseService;
use expense_backend::{app_router, AppState};
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expense_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Expense Backend server...");

    // 設定を読み込む
    let app_config = Config::from_env()?;
    tracing::info!(server_addr = %app_config.server_addr, schema = ?app_config.schema, "Configuration loaded");

    // データベース接続を作成
    let db_pool = match &app_config.schema {
        Some(schema) => {
            tracing::info!("Using schema: {}", schema);

            let base_pool = create_db_pool(&app_config).await?;
            if !schema_exists(&base_pool, schema).await? {
                tracing::info!("Schema does not exist, creating it: {}", schema);
                create_schema(&base_pool, schema).await?;
            }
            base_pool.close().await?;

            create_db_pool_with_schema(&app_config, schema).await?
        }
        None => create_db_pool(&app_config).await?,
    };

    tracing::info!("Database pool created successfully.");

    if app_config.auto_migrate {
        tracing::info!("Applying pending migrations...");
        Migrator::up(&db_pool, None).await?;
    }

    let expense_service = Arc::new(ExpenseService::new(db_pool.clone()));
    let app_router = app_router(AppState::new(expense_service));

    let listener = TcpListener::bind(&app_config.server_addr).await?;
    tracing::info!(
        "Router configured. Server listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app_router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await?;
    tracing::info!("Server stopped.");

    Ok(())
}

/// ctrl+c または SIGTERM のどちらか早い方を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::debug!("Received ctrl+c signal."),
        _ = terminate => tracing::debug!("Received terminate signal."),
    }
}
