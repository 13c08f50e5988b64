//! APIの型定義
//!
//! Web(WASM)とネイティブクライアントで共有される型:
//! - DetectionRecord: 検出履歴1件
//! - UploadResponse: アップロード（推論）結果

use serde::{Deserialize, Serialize};

/// 検出履歴レコード（サーバー側で採番・永続化される）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub id: i64,

    /// ISO-8601形式のタイムスタンプ
    pub timestamp: String,

    pub num_people: u32,

    /// サーバー相対パス（空の場合は画像なし）
    #[serde(default)]
    pub image_path: String,
}

impl DetectionRecord {
    pub fn has_image(&self) -> bool {
        !self.image_path.is_empty()
    }
}

/// アップロード結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// 注釈付き画像のURL（"/static/results/..." 形式）
    pub image_url: String,
    pub num_people: u32,
}
