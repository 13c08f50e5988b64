//! 検索条件パネルコンポーネント

use leptos::prelude::*;

#[component]
pub fn FilterPanel<FN, FD, FS, FC>(
    num_people: Signal<String>,
    on_num_people_input: FN,
    date: Signal<String>,
    on_date_input: FD,
    on_search: FS,
    on_clear: FC,
) -> impl IntoView
where
    FN: Fn(String) + Send + Sync + 'static + Clone,
    FD: Fn(String) + Send + Sync + 'static + Clone,
    FS: Fn(()) + Send + Sync + 'static + Clone,
    FC: Fn(()) + Send + Sync + 'static + Clone,
{
    view! {
        <div class="filter-panel">
            <div class="form-group">
                <label for="filter-num-people">"Number of People:"</label>
                <input
                    type="number"
                    id="filter-num-people"
                    min="0"
                    placeholder="e.g., 3"
                    prop:value=move || num_people.get()
                    on:input={
                        let on_num_people_input = on_num_people_input.clone();
                        move |ev| on_num_people_input(event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label for="filter-date">"Date:"</label>
                <input
                    type="date"
                    id="filter-date"
                    prop:value=move || date.get()
                    on:input={
                        let on_date_input = on_date_input.clone();
                        move |ev| on_date_input(event_target_value(&ev))
                    }
                />
            </div>

            <div class="filter-actions">
                <button
                    class="btn btn-tertiary"
                    on:click={
                        let on_search = on_search.clone();
                        move |_| on_search(())
                    }
                >
                    "Search"
                </button>
                <button
                    class="btn btn-tertiary"
                    on:click={
                        let on_clear = on_clear.clone();
                        move |_| on_clear(())
                    }
                >
                    "Clear Filters"
                </button>
            </div>
        </div>
    }
}
