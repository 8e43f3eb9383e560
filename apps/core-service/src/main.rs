//! # Core Service サーバー
//!
//! ユーザーごとのタスク一覧を提供する HTTP サーバー。
//!
//! ## 構成
//!
//! ```text
//! handler（HTTP） → usecase（ビジネスロジック） → repository（PostgreSQL）
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `CORE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `CORE_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `RUN_MIGRATIONS` | No | `false` で起動時のマイグレーションを省略 |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,tasklist_core_service=debug,...`） |
//!
//! ## 起動方法
//!
//! ```bash
//! CORE_PORT=3001 DATABASE_URL=postgres://... cargo run -p tasklist-core-service
//! ```

use std::net::SocketAddr;

use tasklist_core_service::{
    app_builder::{SERVICE_NAME, build_app},
    config::CoreConfig,
};
use tasklist_infra::{db, repository::PostgresTaskRepository};
use tasklist_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env(SERVICE_NAME);
    init_tracing(&tracing_config);

    let config = CoreConfig::from_env()?;

    run(config).instrument(tracing_config.root_span()).await
}

async fn run(config: CoreConfig) -> anyhow::Result<()> {
    tracing::info!(
        "Core Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("データベースに接続しました");

    if config.run_migrations {
        db::run_migrations(&pool).await?;
        tracing::info!("マイグレーションを適用しました");
    }

    let app = build_app(PostgresTaskRepository::new(pool));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Core Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
