//! 解析開始ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn GenerateButton<F>(
    #[prop(into)] is_loading: Signal<bool>,
    on_generate: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="generate-action">
            <button
                class="btn btn-primary btn-large"
                disabled=move || is_loading.get()
                on:click=move |_| on_generate(())
            >
                {move || if is_loading.get() {
                    view! { <span class="spinner"></span>"Analyzing Scene..." }.into_any()
                } else {
                    view! { <span class="icon">"⚡"</span>"Generate Analysis Report" }.into_any()
                }}
            </button>
        </div>
    }
}
