//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! タスク API が返すエラー本文。入力値の不正（400）と内部エラー（500）の 2 種類のみ。
//!
//! axum の `IntoResponse` 変換は各サービスの責務とし、ここには置かない。

use serde::Serialize;

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://tasklist.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
}

impl ErrorResponse {
    fn new(error_type_suffix: &str, title: &str, status: u16, detail: String) -> Self {
        Self {
            error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
            title: title.to_string(),
            status,
            detail,
        }
    }

    /// 400: 入力値がドメインの検証を通らなかった
    ///
    /// detail には検証メッセージ（例: `"タスク名は必須です"`）をそのまま入れる。
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new("bad-request", "Bad Request", 400, detail.into())
    }

    /// 500: 永続化層の失敗など
    ///
    /// detail は固定値。原因はログにのみ出力する。
    pub fn internal_error() -> Self {
        Self::new(
            "internal-error",
            "Internal Server Error",
            500,
            "内部エラーが発生しました".to_string(),
        )
    }
}
