//! # Core Service 設定
//!
//! 環境変数から Core Service サーバーの設定を読み込む。

use std::env;

use anyhow::Context as _;

/// Core Service サーバーの設定
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// バインドアドレス
    pub host:           String,
    /// ポート番号
    pub port:           u16,
    /// データベース接続 URL
    pub database_url:   String,
    /// 起動時にマイグレーションを実行するか
    pub run_migrations: bool,
}

impl CoreConfig {
    /// 環境変数から設定を読み込む
    ///
    /// | 変数名 | 必須 | 説明 |
    /// |--------|------|------|
    /// | `CORE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
    /// | `CORE_PORT` | **Yes** | ポート番号 |
    /// | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
    /// | `RUN_MIGRATIONS` | No | `false` でマイグレーションを省略（デフォルト: `true`） |
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host:           env::var("CORE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port:           env::var("CORE_PORT")
                .context("CORE_PORT が設定されていません")?
                .parse()
                .context("CORE_PORT は有効なポート番号である必要があります")?,
            database_url:   env::var("DATABASE_URL")
                .context("DATABASE_URL が設定されていません")?,
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| v != "false")
                .unwrap_or(true),
        })
    }
}
