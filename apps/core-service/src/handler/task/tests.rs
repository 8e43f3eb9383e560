use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
    routing::get,
};
use pretty_assertions::assert_eq;
use tasklist_infra::{InfraError, mock::MockTaskRepository, repository::TaskRecord};
use tower::ServiceExt;

use super::*;

const UID: &str = "0000000001";

// テスト用のスタブ実装

/// 取得が必ず失敗するリポジトリ
struct FailingTaskRepository;

#[async_trait]
impl TaskRepository for FailingTaskRepository {
    async fn find_by_user_id(&self, _user_id: &UserId) -> Result<Vec<TaskRecord>, InfraError> {
        Err(InfraError::unexpected("接続失敗"))
    }

    async fn insert(&self, _task: &NewTask) -> Result<u64, InfraError> {
        Err(InfraError::unexpected("接続失敗"))
    }
}

// テストデータ生成

fn create_test_app<R>(repo: R) -> Router
where
    R: TaskRepository + 'static,
{
    let state = Arc::new(TaskState {
        usecase: TaskUseCaseImpl::new(repo),
    });

    Router::new()
        .route(
            "/todo/tasklist/{uid}",
            get(get_task_list::<R>).post(add_task::<R>),
        )
        .with_state(state)
}

fn record(sequence_no: i32, task_name: &str, status_cd: &str) -> TaskRecord {
    TaskRecord {
        sequence_no,
        task_name: task_name.to_string(),
        status_cd: status_cd.to_string(),
    }
}

fn get_request(uid: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(format!("/todo/tasklist/{uid}"))
        .body(Body::empty())
        .unwrap()
}

fn post_request(uid: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(format!("/todo/tasklist/{uid}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn expected_new_task() -> NewTask {
    NewTask::new(
        UserId::new(UID).unwrap(),
        TaskName::new("task1").unwrap(),
        StatusCd::new("1").unwrap(),
    )
}

// テストケース

#[tokio::test]
async fn test_get_task_list_タスクが0件の場合は200で空の配列を返す() {
    // Given
    let repo = MockTaskRepository::new();
    let sut = create_test_app(repo.clone());

    // When
    let response = sut.oneshot(get_request(UID)).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, serde_json::json!([]));
    assert_eq!(repo.find_calls(), 1);
}

#[tokio::test]
async fn test_get_task_list_1件以上の場合は200で取得したタスクを順序どおりに返す() {
    // Given
    let repo = MockTaskRepository::new();
    let user_id = UserId::new(UID).unwrap();
    repo.add_record(user_id.clone(), record(1234, "task1", "0"));
    repo.add_record(user_id.clone(), record(5678, "task2", "1"));
    repo.add_record(user_id, record(9876, "task3", "2"));
    let sut = create_test_app(repo.clone());

    // When
    let response = sut.oneshot(get_request(UID)).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        serde_json::json!([
            { "taskName": "task1", "statusCd": "0", "sequenceNo": 1234 },
            { "taskName": "task2", "statusCd": "1", "sequenceNo": 5678 },
            { "taskName": "task3", "statusCd": "2", "sequenceNo": 9876 },
        ])
    );
    assert_eq!(repo.find_calls(), 1);
}

#[tokio::test]
async fn test_get_task_list_登録がなければ繰り返し取得しても同じ結果を返す() {
    // Given
    let repo = MockTaskRepository::new();
    repo.add_record(UserId::new(UID).unwrap(), record(1, "task1", "0"));
    let sut = create_test_app(repo);

    // When
    let first = sut.clone().oneshot(get_request(UID)).await.unwrap();
    let second = sut.oneshot(get_request(UID)).await.unwrap();

    // Then
    assert_eq!(read_json(first).await, read_json(second).await);
}

#[tokio::test]
async fn test_get_task_list_取得に失敗した場合は500を返す() {
    // Given
    let sut = create_test_app(FailingTaskRepository);

    // When
    let response = sut.oneshot(get_request(UID)).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = read_json(response).await;
    assert_eq!(json["status"], 500);
}

#[tokio::test]
async fn test_get_task_list_前後に空白を含むuidは別ユーザーとして扱う() {
    // Given
    let repo = MockTaskRepository::new();
    repo.add_record(UserId::new("abc").unwrap(), record(1, "secret", "0"));
    let sut = create_test_app(repo);

    // When
    let response = sut.oneshot(get_request("%20abc%20")).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_add_task_前後に空白を含むuidへの登録は元のユーザーに混ざらない() {
    // Given
    let repo = MockTaskRepository::new();
    let sut = create_test_app(repo.clone());

    // When
    sut.clone()
        .oneshot(post_request("%20abc%20", r#"{"taskName":"task1","statusCd":"1"}"#))
        .await
        .unwrap();
    let response = sut.oneshot(get_request("abc")).await.unwrap();

    // Then
    assert_eq!(read_json(response).await, serde_json::json!([]));
    assert_eq!(repo.inserted()[0].user_id().as_str(), " abc ");
}

#[tokio::test]
async fn test_get_task_list_65文字以上のuidでも200で空の配列を返す() {
    // Given
    let repo = MockTaskRepository::new();
    let sut = create_test_app(repo.clone());

    // When
    let response = sut.oneshot(get_request(&"a".repeat(65))).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, serde_json::json!([]));
    assert_eq!(repo.find_calls(), 1);
}

#[tokio::test]
async fn test_add_task_登録が成功した場合は200で成功メッセージを返す() {
    // Given
    let repo = MockTaskRepository::new();
    let sut = create_test_app(repo.clone());

    // When
    let response = sut
        .oneshot(post_request(UID, r#"{"taskName":"task1","statusCd":"1"}"#))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, "Task added successfully.");
    assert_eq!(repo.inserted(), vec![expected_new_task()]);
}

#[tokio::test]
async fn test_add_task_登録が失敗した場合は500で失敗メッセージを返す() {
    // Given
    let repo = MockTaskRepository::failing_on_insert();
    let sut = create_test_app(repo.clone());

    // When
    let response = sut
        .oneshot(post_request(UID, r#"{"taskName":"task1","statusCd":"1"}"#))
        .await
        .unwrap();

    // Then
    assert!(response.status().is_server_error());
    assert_eq!(read_json(response).await, "Task added failed.");
    assert_eq!(repo.inserted(), vec![expected_new_task()]);
}

#[tokio::test]
async fn test_add_task_不正なステータスコードの場合は登録せずに400を返す() {
    // Given
    let repo = MockTaskRepository::new();
    let sut = create_test_app(repo.clone());

    // When
    let response = sut
        .oneshot(post_request(UID, r#"{"taskName":"task1","statusCd":"abc"}"#))
        .await
        .unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(repo.inserted().is_empty());
}

#[tokio::test]
async fn test_add_task_登録したタスクが一覧に含まれる() {
    // Given
    let repo = MockTaskRepository::new();
    let sut = create_test_app(repo);

    // When
    sut.clone()
        .oneshot(post_request(UID, r#"{"taskName":"task1","statusCd":"1"}"#))
        .await
        .unwrap();
    let response = sut.oneshot(get_request(UID)).await.unwrap();

    // Then
    assert_eq!(
        read_json(response).await,
        serde_json::json!([{ "taskName": "task1", "statusCd": "1", "sequenceNo": 1 }])
    );
}

#[test]
fn test_task_dto_from_task_はフィールドをそのまま写す() {
    let task = Task::new(
        tasklist_domain::task::SequenceNo::new(42),
        TaskName::new("書類を提出する").unwrap(),
        StatusCd::new("2").unwrap(),
    );

    let dto = TaskDto::from_task(&task);

    assert_eq!(dto.task_name, "書類を提出する");
    assert_eq!(dto.status_cd, "2");
    assert_eq!(dto.sequence_no, 42);
}
