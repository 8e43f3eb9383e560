//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use tasklist_infra::repository::TaskRepository;
use tasklist_shared::observability::ServiceRequestSpan;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{TaskState, add_task, get_task_list, health_check},
    usecase::TaskUseCaseImpl,
};

/// ログの `service` フィールドに出すサービス名
pub const SERVICE_NAME: &str = "core-service";

/// リポジトリを受け取り、ルーティング済みのアプリケーションを構築する
///
/// | メソッド | パス | ハンドラ |
/// |---|---|---|
/// | GET | `/health` | [`health_check`] |
/// | GET | `/todo/tasklist/{uid}` | [`get_task_list`] |
/// | POST | `/todo/tasklist/{uid}` | [`add_task`] |
pub fn build_app<R>(task_repo: R) -> Router
where
    R: TaskRepository + 'static,
{
    let task_state = Arc::new(TaskState {
        usecase: TaskUseCaseImpl::new(task_repo),
    });

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/todo/tasklist/{uid}",
            get(get_task_list::<R>).post(add_task::<R>),
        )
        .with_state(task_state)
        .layer(
            TraceLayer::new_for_http().make_span_with(ServiceRequestSpan::new(SERVICE_NAME)),
        )
}
