//! 推論画面のアップロードセッション
//!
//! ファイルハンドルの型はプラットフォームごとに異なるため型パラメータで受ける
//! （ブラウザでは `web_sys::File`）。

use crate::config::ApiConfig;
use crate::error::{Result, UPLOAD_FAILED_MESSAGE};
use crate::ticket::{RequestSeq, Ticket};
use crate::types::UploadResponse;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Upload successfully";

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// 一時的な通知（トースト）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// 推論結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceResult {
    pub image_url: String,
    pub num_people: u32,
}

/// メインボタンの表示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Clear,
    Uploading,
    StartUpload { enabled: bool },
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::Clear => "Clear",
            PrimaryAction::Uploading => "Uploading",
            PrimaryAction::StartUpload { .. } => "Start Upload",
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            PrimaryAction::Clear => true,
            PrimaryAction::Uploading => false,
            PrimaryAction::StartUpload { enabled } => *enabled,
        }
    }
}

/// 発行済みのアップロード
#[derive(Debug, Clone)]
pub struct PendingUpload<F> {
    pub ticket: Ticket,
    pub file: F,
}

/// ドロップされたファイルをプレビューできるか（MIMEが `image` で始まる）
pub fn is_previewable(mime: &str) -> bool {
    mime.starts_with("image")
}

#[derive(Debug, Clone)]
pub struct UploadSession<F> {
    selected: Option<F>,
    preview_url: Option<String>,
    uploading: bool,
    result: Option<InferenceResult>,
    notice: Option<Notice>,
    seq: RequestSeq,
    notice_seq: u64,
}

impl<F> Default for UploadSession<F> {
    fn default() -> Self {
        Self {
            selected: None,
            preview_url: None,
            uploading: false,
            result: None,
            notice: None,
            seq: RequestSeq::default(),
            notice_seq: 0,
        }
    }
}

impl<F: Clone> UploadSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn result(&self) -> Option<&InferenceResult> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// 表示中の画像（推論結果を優先、なければドロップのプレビュー）
    pub fn displayed_image(&self) -> Option<&str> {
        self.result
            .as_ref()
            .map(|r| r.image_url.as_str())
            .or(self.preview_url.as_deref())
    }

    /// ピッカーで選んだファイル。既存の選択は置き換える（MIMEは見ない）
    pub fn select(&mut self, file: F) -> bool {
        if self.uploading {
            return false;
        }
        self.selected = Some(file);
        true
    }

    pub fn remove_selection(&mut self) {
        if !self.uploading {
            self.selected = None;
        }
    }

    /// ドロップされた画像のプレビューを表示する（アップロードはしない）。
    /// 置き換えられた古いプレビューURLを返す。
    pub fn show_preview(&mut self, object_url: String) -> Option<String> {
        self.preview_url.replace(object_url)
    }

    pub fn can_start_upload(&self) -> bool {
        self.selected.is_some() && !self.uploading && self.displayed_image().is_none()
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.displayed_image().is_some() {
            PrimaryAction::Clear
        } else if self.uploading {
            PrimaryAction::Uploading
        } else {
            PrimaryAction::StartUpload {
                enabled: self.can_start_upload(),
            }
        }
    }

    /// アップロードを開始する。開始できない状態なら`None`
    pub fn begin_upload(&mut self) -> Option<PendingUpload<F>> {
        if !self.can_start_upload() {
            return None;
        }
        let file = self.selected.clone()?;
        self.uploading = true;
        Some(PendingUpload {
            ticket: self.seq.issue(),
            file,
        })
    }

    /// アップロード完了を反映する。古いチケットの応答は捨てて`false`を返す
    pub fn finish_upload(
        &mut self,
        ticket: Ticket,
        result: Result<UploadResponse>,
        config: &ApiConfig,
    ) -> bool {
        if !self.seq.is_current(ticket) {
            tracing::debug!(ticket = ticket.value(), "stale upload response discarded");
            return false;
        }
        self.uploading = false;
        match result {
            Ok(response) => {
                self.selected = None;
                self.result = Some(InferenceResult {
                    image_url: config.result_url(&response.image_url),
                    num_people: response.num_people,
                });
                self.push_notice(NoticeKind::Success, UPLOAD_SUCCESS_MESSAGE);
            }
            Err(e) => {
                tracing::warn!(error = %e, "upload failed");
                self.push_notice(NoticeKind::Error, UPLOAD_FAILED_MESSAGE);
            }
        }
        true
    }

    /// 指定した通知がまだ表示中なら消す
    pub fn dismiss_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }

    /// すべての状態を初期化する。破棄すべきプレビューURLを返す
    pub fn clear(&mut self) -> Option<String> {
        self.seq.invalidate();
        self.selected = None;
        self.uploading = false;
        self.result = None;
        self.notice = None;
        self.preview_url.take()
    }

    fn push_notice(&mut self, kind: NoticeKind, text: &str) {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            id: self.notice_seq,
            kind,
            text: text.to_string(),
        });
    }
}
