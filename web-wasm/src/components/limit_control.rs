//! 表示件数（limit）入力

use leptos::prelude::*;

#[component]
pub fn LimitControl<FI, FS>(
    limit_input: Signal<String>,
    on_input: FI,
    on_set_limit: FS,
) -> impl IntoView
where
    FI: Fn(String) + Send + Sync + 'static + Clone,
    FS: Fn(()) + Send + Sync + 'static + Clone,
{
    view! {
        <div class="limit-control">
            <button
                class="btn btn-secondary"
                on:click={
                    let on_set_limit = on_set_limit.clone();
                    move |_| on_set_limit(())
                }
            >
                "Set Limit"
            </button>
            <input
                type="number"
                placeholder="Enter limit"
                prop:value=move || limit_input.get()
                on:input={
                    let on_input = on_input.clone();
                    move |ev| on_input(event_target_value(&ev))
                }
            />
        </div>
    }
}
