//! 通知（トースト）コンポーネント

use leptos::prelude::*;
use people_counter_common::{Notice, NoticeKind};

#[component]
pub fn NoticeToast(notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Success => "toast toast-success",
                NoticeKind::Error => "toast toast-error",
            };
            view! { <div class=class role="status">{n.text}</div> }
        })
    }
}
