//! 機能紹介セクション（ファイル未選択時のみ表示）

use leptos::prelude::*;

const FEATURES: &[(&str, &str, &str)] = &[
    ("⚡", "Instant Analysis", "Get real-time scene analysis and threat assessment in seconds"),
    ("⚠", "Risk Assessment", "Comprehensive evaluation of immediate threats and safety concerns"),
    ("🛡", "Response Guidance", "Actionable recommendations for emergency response teams"),
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <h3>"AI-Powered Emergency Analysis"</h3>
            <div class="features-grid">
                {FEATURES
                    .iter()
                    .map(|(icon, title, text)| view! {
                        <div class="card feature-card">
                            <div class="feature-icon">{*icon}</div>
                            <h4>{*title}</h4>
                            <p class="text-muted">{*text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
