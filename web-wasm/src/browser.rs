//! ブラウザAPIの薄いラッパー

use gloo::timers::callback::Timeout;
use web_sys::{File, Url};

/// 通知（トースト）の表示時間
pub const NOTICE_DURATION_MS: u32 = 3_000;

/// ブロッキングアラート
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        tracing::warn!("alert failed: {:?}", e);
    }
}

/// プレビュー用のObject URLを作る
pub fn create_object_url(file: &File) -> Option<String> {
    match Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("createObjectURL failed: {:?}", e);
            None
        }
    }
}

pub fn revoke_object_url(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        tracing::warn!("revokeObjectURL failed: {:?}", e);
    }
}

/// 一定時間後に実行する（通知の自動消去用）
pub fn after_notice_duration<F>(callback: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(NOTICE_DURATION_MS, callback).forget();
}
