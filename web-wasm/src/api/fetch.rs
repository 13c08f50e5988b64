//! fetch APIによる検出APIクライアント
//!
//! ベースURLはビルド時の環境変数 `DETECTION_API_URL` から埋め込む。

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use people_counter_common::{
    ApiConfig, DetectionApi, DetectionRecord, Error, HistoryQuery, Result, SearchQuery,
    UploadResponse,
};

#[derive(Debug, Clone)]
pub struct FetchClient {
    config: ApiConfig,
}

impl FetchClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// ビルド時に埋め込まれたベースURLで作る。不正な値ならデフォルトURL
    pub fn from_build_env() -> Self {
        match ApiConfig::from_env_value(option_env!("DETECTION_API_URL")) {
            Ok(config) => Self::new(config),
            Err(e) => {
                tracing::error!(error = %e, "invalid DETECTION_API_URL, using default");
                Self::new(ApiConfig::default())
            }
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl DetectionApi for FetchClient {
    type File = File;

    async fn history(&self, query: HistoryQuery) -> Result<Vec<DetectionRecord>> {
        let request = build_request("GET", &self.config.history_url(&query), None)?;
        fetch_json(&request).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<DetectionRecord>> {
        let request = build_request("GET", &self.config.search_url(query), None)?;
        fetch_json(&request).await
    }

    async fn upload(&self, file: &File) -> Result<UploadResponse> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(js_error)?;

        tracing::info!(file_name = %file.name(), size = file.size(), "uploading image");
        let request = build_request("POST", &self.config.upload_url(), Some(&form))?;
        fetch_json(&request).await
    }
}

fn build_request(method: &str, url: &str, body: Option<&FormData>) -> Result<Request> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(body);
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    // multipartのContent-Typeはブラウザが境界付きで付与する
    request
        .headers()
        .set("accept", "application/json")
        .map_err(js_error)?;
    Ok(request)
}

async fn fetch_json<T: DeserializeOwned>(request: &Request) -> Result<T> {
    let window = web_sys::window().ok_or_else(|| Error::Network("window not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(|e| Error::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Decode(e.to_string()))
}

fn js_error(e: JsValue) -> Error {
    Error::Network(format!("{:?}", e))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn get_request_accepts_json() {
        let request = build_request("GET", "http://localhost:8000/history?offset=0&limit=10", None)
            .expect("request build failed");

        assert_eq!(request.method(), "GET");
        assert_eq!(request.url(), "http://localhost:8000/history?offset=0&limit=10");
        assert_eq!(
            request.headers().get("accept").expect("header read failed"),
            Some("application/json".to_string())
        );
    }

    #[wasm_bindgen_test]
    fn upload_request_lets_browser_set_content_type() {
        let form = FormData::new().expect("FormData failed");
        form.append_with_str("file", "dummy").expect("append failed");

        let request = build_request("POST", "http://localhost:8000/upload", Some(&form))
            .expect("request build failed");

        assert_eq!(request.method(), "POST");
        let content_type = request
            .headers()
            .get("content-type")
            .expect("header read failed")
            .unwrap_or_default();
        assert!(content_type.starts_with("multipart/form-data"));
    }

    #[wasm_bindgen_test]
    fn build_env_client_has_valid_base_url() {
        let client = FetchClient::from_build_env();
        assert!(client.config().base_url().starts_with("http"));
    }
}
