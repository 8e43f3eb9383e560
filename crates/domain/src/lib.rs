//! # Tasklist ドメイン層
//!
//! タスク一覧のドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! core-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - タスクの所有者を表す識別子
//! - [`task`] - タスクエンティティと値オブジェクト
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tasklist_domain::{
//!     task::{NewTask, StatusCd, TaskName},
//!     user::UserId,
//! };
//!
//! let new_task = NewTask::new(
//!     UserId::new("0000000001")?,
//!     TaskName::new("買い物")?,
//!     StatusCd::new("0")?,
//! );
//! assert_eq!(new_task.task_name().as_str(), "買い物");
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod task;
pub mod user;

pub use error::DomainError;
