//! 推論画面
//!
//! 画像を1枚選んでアップロードし、返ってきた画像と人数を表示する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use people_counter_common::{is_previewable, DetectionApi, PrimaryAction, UploadSession};

use crate::api::FetchClient;
use crate::browser::{after_notice_duration, create_object_url, revoke_object_url};
use crate::components::header::Header;
use crate::components::home_button::HomeButton;
use crate::components::notice_toast::NoticeToast;
use crate::components::upload_area::UploadArea;

#[component]
pub fn Inference() -> impl IntoView {
    // web_sys::File は Send ではないのでローカルストレージに置く
    let session = RwSignal::new_local(UploadSession::<File>::new());
    let api = StoredValue::new(FetchClient::from_build_env());

    on_cleanup(move || {
        if let Some(url) = session.try_update(|s| s.clear()).flatten() {
            revoke_object_url(&url);
        }
    });

    let on_file_selected = move |file: File| {
        tracing::debug!(file_name = %file.name(), "file selected");
        session.update(|s| {
            s.select(file);
        });
    };

    let on_file_dropped = move |file: File| {
        let mime = file.type_();
        if !is_previewable(&mime) {
            tracing::debug!(%mime, "dropped file is not an image, ignored");
            return;
        }
        let Some(url) = create_object_url(&file) else {
            return;
        };
        if let Some(old) = session.try_update(|s| s.show_preview(url)).flatten() {
            revoke_object_url(&old);
        }
    };

    let on_remove = move |_: ()| session.update(|s| s.remove_selection());

    let start_upload = move || {
        let Some(pending) = session.try_update(|s| s.begin_upload()).flatten() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = api.upload(&pending.file).await;
            let notice_id = session
                .try_update(|s| {
                    if s.finish_upload(pending.ticket, result, api.config()) {
                        s.notice().map(|n| n.id)
                    } else {
                        None
                    }
                })
                .flatten();
            if let Some(id) = notice_id {
                after_notice_duration(move || {
                    session.try_update(|s| s.dismiss_notice(id));
                });
            }
        });
    };

    let on_primary = move |_| match session.with_untracked(|s| s.primary_action()) {
        PrimaryAction::Clear => {
            if let Some(url) = session.try_update(|s| s.clear()).flatten() {
                revoke_object_url(&url);
            }
        }
        PrimaryAction::StartUpload { enabled: true } => start_upload(),
        PrimaryAction::StartUpload { enabled: false } | PrimaryAction::Uploading => {}
    };

    let selected_name = Signal::derive(move || session.with(|s| s.selected().map(|f| f.name())));
    let uploading = Signal::derive(move || session.with(|s| s.is_uploading()));
    let notice = Signal::derive(move || session.with(|s| s.notice().cloned()));

    view! {
        <div class="inference">
            <Header title="Inference" />
            <NoticeToast notice=notice />

            <UploadArea
                selected_name=selected_name
                disabled=uploading
                on_file_selected=on_file_selected
                on_file_dropped=on_file_dropped
                on_remove=on_remove
            />

            {move || {
                session
                    .with(|s| s.displayed_image().map(str::to_string))
                    .map(|src| view! {
                        <div class="inference-image">
                            <img src=src alt="Inference image" />
                        </div>
                    })
            }}

            {move || {
                session
                    .with(|s| s.result().map(|r| r.num_people))
                    .map(|n| view! {
                        <p class="people-count">"Number of People: "<strong>{n}</strong></p>
                    })
            }}

            <div class="inference-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || !session.with(|s| s.primary_action().is_enabled())
                    on:click=on_primary
                >
                    {move || session.with(|s| s.primary_action().label())}
                </button>
            </div>

            <HomeButton />
        </div>
    }
}
