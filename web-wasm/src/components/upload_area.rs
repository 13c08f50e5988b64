//! アップロードエリアコンポーネント
//!
//! ピッカーで選んだファイルは選択として、ドロップしたファイルはプレビューとして親に渡す。

use leptos::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn UploadArea<FS, FD, FR>(
    selected_name: Signal<Option<String>>,
    disabled: Signal<bool>,
    on_file_selected: FS,
    on_file_dropped: FD,
    on_remove: FR,
) -> impl IntoView
where
    FS: Fn(File) + Send + Sync + 'static + Clone,
    FD: Fn(File) + Send + Sync + 'static + Clone,
    FR: Fn(()) + Send + Sync + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected(file);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        if disabled.get_untracked() {
            return;
        }
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            on_file_dropped(file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if disabled.get() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <p>"Drag & drop an image here, or"</p>
            <label class="btn btn-secondary file-label">
                "Select File"
                <input
                    type="file"
                    class="file-input"
                    prop:disabled=move || disabled.get()
                    on:change=on_change
                />
            </label>
            {move || {
                selected_name.get().map(|name| {
                    let on_remove = on_remove.clone();
                    view! {
                        <div class="selected-file">
                            <span>{name}</span>
                            <button
                                class="btn btn-link"
                                prop:disabled=move || disabled.get()
                                on:click=move |_| on_remove(())
                            >
                                "Remove"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
