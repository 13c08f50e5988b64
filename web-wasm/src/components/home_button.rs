//! ホームへ戻るボタン

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomeButton() -> impl IntoView {
    view! {
        <div class="home-button">
            <A href="/">
                <button class="btn btn-round">"HOME"</button>
            </A>
        </div>
    }
}
