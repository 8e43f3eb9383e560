//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//! API 層でこのエラーを受け取り、400 Bad Request に変換する。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値が値オブジェクトの不変条件に違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 必須フィールドが未入力
    /// - 文字数制限の超過
    /// - 不正なフォーマット
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
