//! People counter detection API client
//!
//! ブラウザ版と同じ `DetectionApi` 契約をネイティブ環境で実装する。

pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiClient, UploadFile};
pub use config::Config;
pub use error::{PeopleCounterError, Result};
