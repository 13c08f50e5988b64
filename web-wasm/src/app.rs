//! メインアプリケーションコンポーネント（ルーティング）
//!
//! 各画面は自分の状態だけを持ち、画面遷移で破棄される。

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::pages::{History, Home, Inference};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="container">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/inference") view=Inference />
                    <Route path=path!("/history") view=History />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href="/">"Return to Home"</A>
        </div>
    }
}
