//! ホーム画面

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::header::Header;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <Header title="People Counter" />
            <p class="text-muted">"Count people in photos and browse past detections."</p>
            <nav class="home-links">
                <A href="/history">
                    <button class="btn btn-primary">"View History"</button>
                </A>
                <A href="/inference">
                    <button class="btn btn-primary">"Inference"</button>
                </A>
            </nav>
        </div>
    }
}
