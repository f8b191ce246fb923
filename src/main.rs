//! Mergington - 课外活动报名服务
//!
//! 启动顺序：配置 → 日志 → 内存存储 → 凭据来源 → HTTP 服务器

use std::sync::Arc;

use mergington::config::{load_config, print_config};
use mergington::domain::default_activities;
use mergington::infrastructure::adapters::JsonFileCredentialSource;
use mergington::infrastructure::http::{AppState, HttpServer};
use mergington::infrastructure::memory::{InMemoryActivityStore, InMemorySessionManager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},mergington={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Mergington High School - Activities API");
    print_config(&config);

    // 内存活动表，进程重启后恢复为初始目录
    let activities = default_activities()
        .map_err(|e| anyhow::anyhow!("Invalid activity catalog: {}", e))?;
    tracing::info!(count = activities.len(), "Activity catalog loaded");
    let activity_repo = InMemoryActivityStore::new(activities).arc();

    // 内存会话表
    let session_manager = InMemorySessionManager::new().arc();

    // 教师凭据，每次登录时重新读取
    let credential_source = Arc::new(JsonFileCredentialSource::new(
        &config.auth.credentials_path,
    ));
    if !credential_source.path().exists() {
        tracing::warn!(
            path = ?credential_source.path(),
            "Credentials file not found, logins will fail until it is created"
        );
    }

    let state = AppState::new(activity_repo, session_manager, credential_source);
    let server = HttpServer::new(config.server.clone(), state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                // 无法监听信号时不触发关闭
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
