//! # ユーザー識別子
//!
//! タスクの所有者を表す。値は外部の認証基盤が払い出す不透明な文字列で、
//! この層では形式を解釈しない。空白の除去や長さの制限も行わず、
//! 受け取った文字列をそのまま所有者のキーとして扱う。

use derive_more::Display;

use crate::DomainError;

/// ユーザー ID（値オブジェクト）
///
/// # 不変条件
///
/// - 空文字列ではない
/// - 受け取った文字列と完全に一致する（trim しない）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation("ユーザーIDは必須です".to_string()));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_数字のみのユーザーidを受け付ける() {
        let user_id = UserId::new("00000000000000000001").unwrap();

        assert_eq!(user_id.as_str(), "00000000000000000001");
        assert_eq!(user_id.to_string(), "00000000000000000001");
    }

    #[test]
    fn test_空のユーザーidはバリデーションエラー() {
        let result = UserId::new("");

        assert!(result.is_err());
    }

    #[test]
    fn test_前後の空白はそのまま保持され別のユーザーになる() {
        let padded = UserId::new(" abc ").unwrap();

        assert_eq!(padded.as_str(), " abc ");
        assert_ne!(padded, UserId::new("abc").unwrap());
    }

    #[test]
    fn test_長いユーザーidも受け付ける() {
        let long = "a".repeat(300);

        let user_id = UserId::new(long.clone()).unwrap();

        assert_eq!(user_id.as_str(), long);
    }
}
