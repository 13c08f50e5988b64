//! APIの接続設定とURL組み立て

use crate::error::{Error, Result};
use crate::query::{HistoryQuery, SearchQuery};

/// ベースURLを指定する環境変数名
pub const API_URL_ENV: &str = "DETECTION_API_URL";

/// 環境変数が未設定の場合のベースURL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// 検出APIの接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "{} must start with http:// or https:// (got '{}')",
                API_URL_ENV, base_url
            )));
        }
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    /// 環境変数の値から作る（未設定・空の場合はデフォルト）
    pub fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Self::new(v),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn history_url(&self, query: &HistoryQuery) -> String {
        format!("{}/history/?{}", self.base_url, query.to_query_string())
    }

    /// 条件なしの場合は `?` を付けない
    pub fn search_url(&self, query: &SearchQuery) -> String {
        let params = query.to_query_string();
        if params.is_empty() {
            format!("{}/search/", self.base_url)
        } else {
            format!("{}/search/?{}", self.base_url, params)
        }
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload/", self.base_url)
    }

    /// 履歴サムネイルのURL（`<base>/<image_path>`）
    pub fn asset_url(&self, image_path: &str) -> String {
        format!("{}/{}", self.base_url, image_path)
    }

    /// 推論結果画像のURL（`<base><image_url>`、単純連結）
    pub fn result_url(&self, image_url: &str) -> String {
        format!("{}{}", self.base_url, image_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
