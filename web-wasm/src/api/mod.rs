//! 検出APIクライアント（ブラウザfetch）

pub mod fetch;

pub use fetch::FetchClient;
