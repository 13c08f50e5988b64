//! ページ送りボタン

use leptos::prelude::*;

#[component]
pub fn Pagination<FP, FN>(
    page: Signal<u32>,
    can_go_previous: Signal<bool>,
    can_go_next: Signal<bool>,
    on_previous: FP,
    on_next: FN,
) -> impl IntoView
where
    FP: Fn(()) + Send + Sync + 'static + Clone,
    FN: Fn(()) + Send + Sync + 'static + Clone,
{
    view! {
        <div class="pagination">
            <button
                class="btn btn-secondary"
                disabled=move || !can_go_previous.get()
                on:click={
                    let on_previous = on_previous.clone();
                    move |_| on_previous(())
                }
            >
                "Previous"
            </button>
            <span class="page-number">{move || page.get()}</span>
            <button
                class="btn btn-secondary"
                disabled=move || !can_go_next.get()
                on:click={
                    let on_next = on_next.clone();
                    move |_| on_next(())
                }
            >
                "Next"
            </button>
        </div>
    }
}
