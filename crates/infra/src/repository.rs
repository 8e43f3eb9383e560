//! # リポジトリ
//!
//! 永続化のインターフェース（トレイト）と PostgreSQL 実装を提供する。
//! ユースケース層はトレイト経由で依存するため、テストではモックに差し替えられる。

pub mod task_repository;

pub use task_repository::{PostgresTaskRepository, TaskRecord, TaskRepository};
