//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(title: &'static str, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>{title}</h1>
            {children.map(|children| children())}
        </header>
    }
}
