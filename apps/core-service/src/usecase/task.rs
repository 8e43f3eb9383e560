//! # タスクユースケース
//!
//! ユーザーのタスク一覧の取得と、タスクの登録に関するビジネスロジックを実装する。

use tasklist_domain::{
    task::{NewTask, SequenceNo, StatusCd, Task, TaskName},
    user::UserId,
};
use tasklist_infra::repository::{TaskRecord, TaskRepository};

use crate::error::CoreError;

/// タスクユースケース実装
pub struct TaskUseCaseImpl<R> {
    task_repo: R,
}

impl<R> TaskUseCaseImpl<R>
where
    R: TaskRepository,
{
    pub fn new(task_repo: R) -> Self {
        Self { task_repo }
    }

    /// ユーザーのタスク一覧を取得する
    ///
    /// タスクが 1 件もない場合は `None` を返す（空の Vec は返さない）。
    /// ある場合はリポジトリの順序を保ったまま [`Task`] に変換して返す。
    pub async fn get_task_list(&self, user_id: &UserId) -> Result<Option<Vec<Task>>, CoreError> {
        let records = self.task_repo.find_by_user_id(user_id).await?;

        if records.is_empty() {
            return Ok(None);
        }

        Ok(Some(records.into_iter().map(to_task).collect()))
    }

    /// タスクを登録する
    ///
    /// リポジトリの結果（影響行数）をそのまま返す。失敗もそのまま伝播する。
    pub async fn add_task(&self, new_task: &NewTask) -> Result<u64, CoreError> {
        let count = self.task_repo.insert(new_task).await?;
        tracing::debug!(user_id = %new_task.user_id(), count, "タスクを登録しました");
        Ok(count)
    }
}

/// 永続化済みのレコードをエンティティに復元する
fn to_task(record: TaskRecord) -> Task {
    Task::new(
        SequenceNo::new(record.sequence_no),
        TaskName::from_db(record.task_name),
        StatusCd::from_db(record.status_cd),
    )
}
