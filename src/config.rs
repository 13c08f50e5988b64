use crate::error::{PeopleCounterError, Result};
use people_counter_common::{ApiConfig, API_URL_ENV};

/// ネイティブクライアントの設定
///
/// 設定項目はAPIのベースURLのみ（環境変数 `DETECTION_API_URL`）。
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
}

impl Config {
    /// 環境変数から読み込む（未設定の場合はデフォルトURL）
    pub fn from_env() -> Result<Self> {
        let value = std::env::var(API_URL_ENV).ok();
        let api = ApiConfig::from_env_value(value.as_deref())?;
        Ok(Self { api })
    }

    /// 環境変数を必須として読み込む
    pub fn require_env() -> Result<Self> {
        match std::env::var(API_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Ok(Self {
                api: ApiConfig::new(&value)?,
            }),
            _ => Err(PeopleCounterError::MissingApiUrl),
        }
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            api: ApiConfig::new(base_url)?,
        })
    }
}
