//! # タスク API ハンドラ
//!
//! ユーザーのタスク一覧の取得と、タスクの登録エンドポイントを実装する。
//!
//! | メソッド | パス | 成功時 | 失敗時 |
//! |---|---|---|---|
//! | GET | `/todo/tasklist/{uid}` | 200 タスクの配列（0 件なら `[]`） | 500 Problem Details |
//! | POST | `/todo/tasklist/{uid}` | 200 `"Task added successfully."` | 500 `"Task added failed."` |

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tasklist_domain::{
    task::{NewTask, StatusCd, Task, TaskName},
    user::UserId,
};
use tasklist_infra::repository::TaskRepository;

use crate::{error::CoreError, usecase::TaskUseCaseImpl};

/// タスク登録成功時のレスポンス本文
pub const ADD_TASK_SUCCEEDED: &str = "Task added successfully.";

/// タスク登録失敗時のレスポンス本文
pub const ADD_TASK_FAILED: &str = "Task added failed.";

/// タスクハンドラーの State
pub struct TaskState<R> {
    pub usecase: TaskUseCaseImpl<R>,
}

/// タスク一覧の要素 DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub task_name:   String,
    pub status_cd:   String,
    pub sequence_no: i32,
}

impl TaskDto {
    pub fn from_task(task: &Task) -> Self {
        Self {
            task_name:   task.task_name().as_str().to_string(),
            status_cd:   task.status_cd().as_str().to_string(),
            sequence_no: task.sequence_no().as_i32(),
        }
    }
}

/// タスク登録リクエスト
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTaskRequest {
    pub task_name: String,
    pub status_cd: String,
}

/// ユーザーのタスク一覧を取得する
///
/// タスクがない場合もエラーにはせず、空の配列を返す。
///
/// ## エンドポイント
/// GET /todo/tasklist/{uid}
#[tracing::instrument(skip_all, fields(%uid))]
pub async fn get_task_list<R>(
    State(state): State<Arc<TaskState<R>>>,
    Path(uid): Path<String>,
) -> Result<Response, CoreError>
where
    R: TaskRepository,
{
    let user_id = UserId::new(uid)?;

    let tasks = state.usecase.get_task_list(&user_id).await?;

    let response: Vec<TaskDto> = tasks
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(TaskDto::from_task)
        .collect();

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// ユーザーのタスクを登録する
///
/// 登録の成否は固定メッセージの JSON 文字列で返す。
/// 入力値が不正な場合は登録を試みず 400 を返す。
///
/// ## エンドポイント
/// POST /todo/tasklist/{uid}
#[tracing::instrument(skip_all, fields(%uid))]
pub async fn add_task<R>(
    State(state): State<Arc<TaskState<R>>>,
    Path(uid): Path<String>,
    Json(req): Json<AddTaskRequest>,
) -> Result<Response, CoreError>
where
    R: TaskRepository,
{
    let new_task = NewTask::new(
        UserId::new(uid)?,
        TaskName::new(req.task_name)?,
        StatusCd::new(req.status_cd)?,
    );

    let response = match state.usecase.add_task(&new_task).await {
        Ok(_) => (StatusCode::OK, Json(ADD_TASK_SUCCEEDED)),
        Err(e) => {
            tracing::error!(error = %e, "タスクの登録に失敗しました");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ADD_TASK_FAILED))
        }
    };

    Ok(response.into_response())
}

#[cfg(test)]
mod tests;
