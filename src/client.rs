//! 検出APIのネイティブクライアント（reqwest）

use std::path::Path;

use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{PeopleCounterError, Result};
use people_counter_common::{
    ApiConfig, DetectionApi, DetectionRecord, Error as ApiError, HistoryQuery, SearchQuery,
    UploadResponse,
};

/// アップロードするファイル
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// 未指定の場合はContent-Typeを付けない（サーバー側に任せる）
    pub mime: Option<String>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// ファイルを読み込む（拡張子・中身による画像判定はしない）
    pub async fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PeopleCounterError::FileNotFound(path.display().to_string()));
        }
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

/// 検出APIクライアント
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// User-Agent付きのHTTPクライアントで作る
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("people-counter/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            config: config.api.clone(),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> people_counter_common::Result<T> {
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }
}

impl DetectionApi for ApiClient {
    type File = UploadFile;

    async fn history(&self, query: HistoryQuery) -> people_counter_common::Result<Vec<DetectionRecord>> {
        self.get_json(&self.config.history_url(&query)).await
    }

    async fn search(&self, query: &SearchQuery) -> people_counter_common::Result<Vec<DetectionRecord>> {
        self.get_json(&self.config.search_url(query)).await
    }

    async fn upload(&self, file: &UploadFile) -> people_counter_common::Result<UploadResponse> {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        if let Some(mime) = &file.mime {
            part = part.mime_str(mime).map_err(network_error)?;
        }
        let form = Form::new().part("file", part);

        let url = self.config.upload_url();
        tracing::info!(%url, file_name = %file.file_name, size = file.bytes.len(), "uploading image");
        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> people_counter_common::Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    let body = response.bytes().await.map_err(network_error)?;
    Ok(serde_json::from_slice(&body)?)
}

fn network_error(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}
