//! キャプション表示コンポーネント

use leptos::prelude::*;
use disaster_scene_common::ResultView;

#[component]
pub fn CaptionDisplay(#[prop(into)] state: Signal<ResultView<String>>) -> impl IntoView {
    move || match state.get() {
        ResultView::Loading => view! {
            <div class="card caption-card">
                <div class="card-icon"><span class="spinner"></span></div>
                <div class="card-body">
                    <h3>"Generating Caption"</h3>
                    <div class="skeleton skeleton-3-4"></div>
                    <div class="skeleton skeleton-1-2"></div>
                </div>
            </div>
        }
        .into_any(),
        ResultView::Empty => view! {
            <div class="card caption-card">
                <div class="card-icon muted">"💬"</div>
                <div class="card-body">
                    <h3>"Scene Caption"</h3>
                    <p class="text-muted">
                        "Upload an image to generate an automatic scene description."
                    </p>
                </div>
            </div>
        }
        .into_any(),
        ResultView::Populated(caption) => view! {
            <div class="card caption-card fade-in">
                <div class="card-icon">"💬"</div>
                <div class="card-body">
                    <h3>"Scene Caption"</h3>
                    <p class="caption-text">{caption}</p>
                </div>
            </div>
        }
        .into_any(),
    }
}
