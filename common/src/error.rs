//! エラー型定義

use thiserror::Error;

/// 履歴取得失敗時に画面へ出す文言
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch records";

/// アップロード失敗時に画面へ出す文言
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";

/// Limit入力が不正な場合のアラート文言
pub const INVALID_LIMIT_MESSAGE: &str = "Please enter a valid number greater than 0.";

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Status(u16),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("{}", INVALID_LIMIT_MESSAGE)]
    InvalidLimit(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 入力検証エラー（ブロッキングアラートで通知し、状態は変えない）
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidLimit(_) | Error::InvalidFilter(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let error = Error::Status(500);
        assert_eq!(format!("{}", error), "API error: 500");
    }

    #[test]
    fn test_error_display_invalid_limit() {
        let error = Error::InvalidLimit("abc".to_string());
        assert_eq!(format!("{}", error), INVALID_LIMIT_MESSAGE);
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("ベースURLが不正です".to_string());
        assert_eq!(format!("{}", error), "Config error: ベースURLが不正です");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Decode(_)));
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::InvalidLimit("0".into()).is_validation());
        assert!(Error::InvalidFilter("x".into()).is_validation());
        assert!(!Error::Network("offline".into()).is_validation());
        assert!(!Error::Status(404).is_validation());
    }
}
