//! 履歴画面
//!
//! 状態遷移は `HistoryState` が持ち、この画面は取得の発行と結果の反映だけを行う。

use leptos::prelude::*;
use leptos::task::spawn_local;

use people_counter_common::{fetch_records, DetectionRecord, HistoryState, PendingFetch, Result};

use crate::api::FetchClient;
use crate::browser::alert;
use crate::components::filter_panel::FilterPanel;
use crate::components::header::Header;
use crate::components::home_button::HomeButton;
use crate::components::limit_control::LimitControl;
use crate::components::pagination::Pagination;
use crate::components::record_gallery::RecordGallery;

#[component]
pub fn History() -> impl IntoView {
    let state = RwSignal::new(HistoryState::new());
    let api = StoredValue::new(FetchClient::from_build_env());

    let run = move |pending: PendingFetch| {
        let api = api.get_value();
        spawn_local(async move {
            let result = fetch_records(&api, &pending.request).await;
            state.try_update(|s| s.finish_fetch(pending.ticket, result));
        });
    };

    // 入力エラーはアラートで知らせ、状態はそのまま
    let run_validated = move |pending: Option<Result<PendingFetch>>| match pending {
        Some(Ok(pending)) => run(pending),
        Some(Err(e)) => {
            tracing::debug!(error = %e, "input rejected");
            alert(&e.to_string());
        }
        None => {}
    };

    if let Some(pending) = state.try_update(|s| s.refresh()) {
        run(pending);
    }

    let on_limit_input = move |value: String| state.update(|s| s.set_limit_input(value));
    let on_set_limit = move |_: ()| run_validated(state.try_update(|s| s.apply_limit()));
    let on_num_people_input = move |value: String| state.update(|s| s.set_num_people_input(value));
    let on_date_input = move |value: String| state.update(|s| s.set_date_input(value));
    let on_search = move |_: ()| run_validated(state.try_update(|s| s.search()));
    let on_clear = move |_: ()| {
        if let Some(pending) = state.try_update(|s| s.clear_filters()) {
            run(pending);
        }
    };
    let on_previous = move |_: ()| {
        if let Some(pending) = state.try_update(|s| s.previous()).flatten() {
            run(pending);
        }
    };
    let on_next = move |_: ()| {
        if let Some(pending) = state.try_update(|s| s.next()).flatten() {
            run(pending);
        }
    };

    let limit_input = Signal::derive(move || state.with(|s| s.limit_input().to_string()));
    let num_people_input = Signal::derive(move || state.with(|s| s.num_people_input().to_string()));
    let date_input = Signal::derive(move || state.with(|s| s.date_input().to_string()));

    // 入力のたびにギャラリーを描き直さないようにMemoで絞る
    let loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));
    let records: Signal<Vec<DetectionRecord>> =
        Memo::new(move |_| state.with(|s| s.records().to_vec())).into();
    let page: Signal<u32> = Memo::new(move |_| state.with(|s| s.page())).into();
    let can_go_previous: Signal<bool> = Memo::new(move |_| state.with(|s| s.can_go_previous())).into();
    let can_go_next: Signal<bool> = Memo::new(move |_| state.with(|s| s.can_go_next())).into();
    let shows_pagination = Memo::new(move |_| state.with(|s| s.shows_pagination()));

    view! {
        <div class="history">
            <Header title="Detection History">
                <LimitControl
                    limit_input=limit_input
                    on_input=on_limit_input
                    on_set_limit=on_set_limit
                />
            </Header>

            <FilterPanel
                num_people=num_people_input
                on_num_people_input=on_num_people_input
                date=date_input
                on_date_input=on_date_input
                on_search=on_search
                on_clear=on_clear
            />

            {move || {
                if loading.get() {
                    return view! { <p class="loading">"Loading..."</p> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <p class="error-message">{message}</p> }.into_any();
                }
                let config = api.with_value(|api| api.config().clone());
                view! {
                    <RecordGallery records=records config=config />
                    <Show when=move || shows_pagination.get()>
                        <Pagination
                            page=page
                            can_go_previous=can_go_previous
                            can_go_next=can_go_next
                            on_previous=on_previous
                            on_next=on_next
                        />
                    </Show>
                }
                .into_any()
            }}

            <HomeButton />
        </div>
    }
}
