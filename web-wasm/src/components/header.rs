//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-icon">"⚠"</div>
            <div>
                <h1>"Disaster Scene Analysis"</h1>
                <p class="text-muted">"AI-powered emergency response tool"</p>
            </div>
        </header>
    }
}
