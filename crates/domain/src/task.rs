//! # タスク
//!
//! ユーザーごとのタスク一覧を構成するエンティティと値オブジェクト。
//!
//! - [`Task`]: 永続化済みのタスク（連番・タスク名・ステータスコード）
//! - [`NewTask`]: 登録要求から組み立てる、所有者付きの未永続化タスク
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tasklist_domain::task::{SequenceNo, StatusCd, Task, TaskName, TaskStatus};
//!
//! let task = Task::new(
//!     SequenceNo::new(1),
//!     TaskName::new("書類を提出する")?,
//!     StatusCd::new("1")?,
//! );
//! assert_eq!(task.status_cd().status(), Some(TaskStatus::InProgress));
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;

use derive_more::Display;
use strum::{EnumString, IntoStaticStr};

use crate::{DomainError, user::UserId};

// =========================================================================
// SequenceNo（連番）
// =========================================================================

/// ユーザー内のタスク連番（値オブジェクト）
///
/// 一覧の並び順であり、ユーザー内でタスクを一意に識別する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct SequenceNo(i32);

impl SequenceNo {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

// =========================================================================
// TaskName（タスク名）
// =========================================================================

define_validated_string! {
    /// タスク名（値オブジェクト）
    ///
    /// 1〜100 文字（trim 後）。
    pub struct TaskName {
        label: "タスク名",
        max_length: 100,
    }
}

// =========================================================================
// StatusCd（ステータスコード）
// =========================================================================

/// ステータスコードの最大文字数（DB: `VARCHAR(2)`）
const MAX_STATUS_CD_LENGTH: usize = 2;

/// ステータスコード（値オブジェクト）
///
/// `"0"`, `"1"`, `"2"` のような短い数字文字列。
/// 既知コードへの所属は検証しない（未知のコードも保持できる）。
///
/// # 不変条件
///
/// - 空文字列ではない
/// - ASCII 数字のみ、最大 2 文字
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct StatusCd(String);

impl StatusCd {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "ステータスコードは必須です".to_string(),
            ));
        }

        if value.len() > MAX_STATUS_CD_LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::Validation(format!(
                "ステータスコードは {MAX_STATUS_CD_LENGTH} 桁以内の数字である必要があります: {value}"
            )));
        }

        Ok(Self(value))
    }

    /// 永続化済みの値から復元する（検証しない）
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 既知のステータスに解釈する
    ///
    /// 未知のコードの場合は `None` を返す。
    pub fn status(&self) -> Option<TaskStatus> {
        TaskStatus::from_str(&self.0).ok()
    }
}

impl From<TaskStatus> for StatusCd {
    fn from(status: TaskStatus) -> Self {
        let code: &'static str = status.into();
        Self(code.to_string())
    }
}

/// 既知のタスクステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, EnumString)]
pub enum TaskStatus {
    /// 未着手
    #[strum(serialize = "0")]
    NotStarted,
    /// 対応中
    #[strum(serialize = "1")]
    InProgress,
    /// 完了
    #[strum(serialize = "2")]
    Done,
}

// =========================================================================
// Task（タスクエンティティ）
// =========================================================================

/// タスクエンティティ
///
/// リポジトリから取得したタスク 1 件を表す。生成後は不変。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    sequence_no: SequenceNo,
    task_name:   TaskName,
    status_cd:   StatusCd,
}

impl Task {
    pub fn new(sequence_no: SequenceNo, task_name: TaskName, status_cd: StatusCd) -> Self {
        Self {
            sequence_no,
            task_name,
            status_cd,
        }
    }

    pub fn sequence_no(&self) -> SequenceNo {
        self.sequence_no
    }

    pub fn task_name(&self) -> &TaskName {
        &self.task_name
    }

    pub fn status_cd(&self) -> &StatusCd {
        &self.status_cd
    }
}

// =========================================================================
// NewTask（登録用タスク）
// =========================================================================

/// 登録用タスク
///
/// 連番は永続化時に採番されるため持たない。
/// 値で比較できるので、テストでリポジトリに渡された内容を検証できる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    user_id:   UserId,
    task_name: TaskName,
    status_cd: StatusCd,
}

impl NewTask {
    pub fn new(user_id: UserId, task_name: TaskName, status_cd: StatusCd) -> Self {
        Self {
            user_id,
            task_name,
            status_cd,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn task_name(&self) -> &TaskName {
        &self.task_name
    }

    pub fn status_cd(&self) -> &StatusCd {
        &self.status_cd
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // ===== TaskName =====

    #[rstest]
    #[case("task1", "task1")]
    #[case("  前後に空白  ", "前後に空白")]
    fn test_タスク名は前後の空白を除いて保持する(#[case] input: &str, #[case] expected: &str) {
        let name = TaskName::new(input).unwrap();

        assert_eq!(name.as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_空のタスク名はバリデーションエラー(#[case] input: &str) {
        let result = TaskName::new(input);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_タスク名は100文字まで受け付ける() {
        assert!(TaskName::new("あ".repeat(100)).is_ok());
        assert!(TaskName::new("あ".repeat(101)).is_err());
    }

    // ===== StatusCd =====

    #[rstest]
    #[case("0", Some(TaskStatus::NotStarted))]
    #[case("1", Some(TaskStatus::InProgress))]
    #[case("2", Some(TaskStatus::Done))]
    #[case("3", None)]
    #[case("10", None)]
    fn test_ステータスコードを既知のステータスに解釈する(
        #[case] code: &str,
        #[case] expected: Option<TaskStatus>,
    ) {
        let status_cd = StatusCd::new(code).unwrap();

        assert_eq!(status_cd.status(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("123")]
    #[case("-1")]
    fn test_不正なステータスコードはバリデーションエラー(#[case] input: &str) {
        let result = StatusCd::new(input);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_ステータスからステータスコードに変換できる() {
        assert_eq!(StatusCd::from(TaskStatus::Done).as_str(), "2");
    }

    #[test]
    fn test_from_dbは検証せずに復元する() {
        let status_cd = StatusCd::from_db("xyz".to_string());

        assert_eq!(status_cd.as_str(), "xyz");
        assert_eq!(status_cd.status(), None);
    }

    // ===== NewTask =====

    #[test]
    fn test_同じ値から作ったnew_taskは等しい() {
        let build = || {
            NewTask::new(
                UserId::new("0000000001").unwrap(),
                TaskName::new("task1").unwrap(),
                StatusCd::new("1").unwrap(),
            )
        };

        assert_eq!(build(), build());
    }
}
