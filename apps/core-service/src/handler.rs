//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、ビジネスロジックはユースケースに委譲する

pub mod health;
pub mod task;

pub use health::health_check;
pub use task::{TaskState, add_task, get_task_list};
