//! People Counter Common Library
//!
//! Web(WASM)とネイティブクライアントで共有される型・API契約・画面状態

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod query;
pub mod ticket;
pub mod types;
pub mod upload;

pub use api::{fetch_records, DetectionApi};
pub use config::{ApiConfig, API_URL_ENV, DEFAULT_API_URL};
pub use error::{Error, Result, FETCH_FAILED_MESSAGE, INVALID_LIMIT_MESSAGE, UPLOAD_FAILED_MESSAGE};
pub use format::format_timestamp;
pub use history::{FetchMode, HistoryRequest, HistoryState, PendingFetch};
pub use query::{HistoryQuery, SearchQuery};
pub use ticket::Ticket;
pub use types::{DetectionRecord, UploadResponse};
pub use upload::{is_previewable, InferenceResult, Notice, NoticeKind, PendingUpload, PrimaryAction, UploadSession};
