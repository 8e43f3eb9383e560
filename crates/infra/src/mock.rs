//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! tasklist-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tasklist_domain::{task::NewTask, user::UserId};

use crate::{
    error::InfraError,
    repository::{TaskRecord, TaskRepository},
};

// ===== MockTaskRepository =====

/// インメモリの TaskRepository
///
/// `clone()` したインスタンス同士は状態を共有するため、
/// ユースケースに渡した後も呼び出し履歴を検証できる。
#[derive(Clone, Default)]
pub struct MockTaskRepository {
    tasks:          Arc<Mutex<Vec<(UserId, TaskRecord)>>>,
    inserted:       Arc<Mutex<Vec<NewTask>>>,
    find_calls:     Arc<AtomicUsize>,
    fail_on_insert: Arc<AtomicBool>,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登録時に必ず失敗するモックを作成する
    pub fn failing_on_insert() -> Self {
        let repo = Self::new();
        repo.fail_on_insert.store(true, Ordering::SeqCst);
        repo
    }

    /// 事前データを追加する
    pub fn add_record(&self, user_id: UserId, record: TaskRecord) {
        self.tasks.lock().unwrap().push((user_id, record));
    }

    /// `insert` に渡されたタスクを呼び出し順に返す
    pub fn inserted(&self) -> Vec<NewTask> {
        self.inserted.lock().unwrap().clone()
    }

    /// `find_by_user_id` の呼び出し回数
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<TaskRecord>, InfraError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);

        let mut records: Vec<TaskRecord> = self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, record)| record.clone())
            .collect();
        records.sort_by_key(|r| r.sequence_no);
        Ok(records)
    }

    async fn insert(&self, task: &NewTask) -> Result<u64, InfraError> {
        self.inserted.lock().unwrap().push(task.clone());

        if self.fail_on_insert.load(Ordering::SeqCst) {
            return Err(InfraError::unexpected("タスクの登録に失敗しました"));
        }

        let mut tasks = self.tasks.lock().unwrap();
        let next_sequence_no = tasks
            .iter()
            .filter(|(owner, _)| owner == task.user_id())
            .map(|(_, r)| r.sequence_no)
            .max()
            .unwrap_or(0)
            + 1;
        tasks.push((
            task.user_id().clone(),
            TaskRecord {
                sequence_no: next_sequence_no,
                task_name:   task.task_name().as_str().to_string(),
                status_cd:   task.status_cd().as_str().to_string(),
            },
        ));
        Ok(1)
    }
}
