//! # TaskRepository
//!
//! ユーザーごとのタスク一覧の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **連番の採番**: 登録時にユーザー内の `MAX(sequence_no) + 1` を同一 SQL 内で採番する
//! - **一意性**: 主キー `(user_id, sequence_no)` で保証する。同時登録で採番が衝突した
//!   場合は制約違反のエラーとして呼び出し元に返す
//! - **生レコード**: 取得結果はドメインへ変換せず [`TaskRecord`] のまま返し、
//!   変換はユースケース層が行う

use async_trait::async_trait;
use sqlx::PgPool;
use tasklist_domain::{task::NewTask, user::UserId};

use crate::error::InfraError;

/// タスク一覧の生レコード
///
/// `tasks` テーブルから取得した 1 行を表す。
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TaskRecord {
    pub sequence_no: i32,
    pub task_name:   String,
    pub status_cd:   String,
}

/// タスクリポジトリトレイト
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// ユーザーのタスクを連番の昇順で取得する
    ///
    /// タスクがない場合は空の Vec を返す。
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<TaskRecord>, InfraError>;

    /// タスクを登録し、影響を受けた行数を返す
    async fn insert(&self, task: &NewTask) -> Result<u64, InfraError>;
}

/// PostgreSQL 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%user_id))]
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<TaskRecord>, InfraError> {
        let records = sqlx::query_as::<_, TaskRecord>(
            r#"
            SELECT
                sequence_no,
                task_name,
                status_cd
            FROM tasks
            WHERE user_id = $1
            ORDER BY sequence_no ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(user_id = %task.user_id()))]
    async fn insert(&self, task: &NewTask) -> Result<u64, InfraError> {
        let result = sqlx::query(
            r#"
            INSERT INTO tasks (user_id, sequence_no, task_name, status_cd)
            SELECT $1, COALESCE(MAX(sequence_no), 0) + 1, $2, $3
            FROM tasks
            WHERE user_id = $1
            "#,
        )
        .bind(task.user_id().as_str())
        .bind(task.task_name().as_str())
        .bind(task.status_cd().as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
