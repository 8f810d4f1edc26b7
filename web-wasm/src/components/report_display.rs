//! 災害レポート表示コンポーネント
//!
//! テキストレポートはそのまま、構造化レポートは危険度バッジ付きで描画する。
//! 脅威・推奨事項のリストは空なら見出しごと描画しない。

use leptos::prelude::*;
use disaster_scene_common::{DisasterReport, Emphasis, Report, ResultView};

#[component]
pub fn ReportDisplay(#[prop(into)] state: Signal<ResultView<Report>>) -> impl IntoView {
    move || match state.get() {
        ResultView::Loading => view! {
            <div class="card report-card">
                <div class="report-header">
                    <div class="card-icon"><span class="pulse">"📈"</span></div>
                    <div>
                        <h2>"Generating Analysis Report"</h2>
                        <p class="text-muted">"Processing disaster scene data..."</p>
                    </div>
                </div>
                <div class="skeleton-rows">
                    {(0..5)
                        .map(|_| view! {
                            <div class="skeleton-row">
                                <div class="skeleton skeleton-1-4"></div>
                                <div class="skeleton skeleton-3-4"></div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
        ResultView::Empty => view! {
            <div class="card report-card report-empty">
                <div class="empty-icon">"⚠"</div>
                <h3>"No Analysis Available"</h3>
                <p class="text-muted">
                    "Upload an image and click \"Generate Report\" to begin analysis."
                </p>
            </div>
        }
        .into_any(),
        ResultView::Populated(Report::Text(text)) => view! {
            <div class="card report-card fade-in">
                <h2>"📝 Disaster Report"</h2>
                <pre class="report-text">{text}</pre>
            </div>
        }
        .into_any(),
        ResultView::Populated(Report::Structured(report)) => structured_report(report).into_any(),
    }
}

fn structured_report(report: DisasterReport) -> impl IntoView {
    let badge_class = Emphasis::for_severity(report.severity).css_class();
    let badge_label = report.severity.badge_label();
    let fields = report
        .fields()
        .map(|(label, value)| (label, value.to_string()));
    let threats = report.threats_section().map(<[String]>::to_vec);
    let recommendations = report.recommendations_section().map(<[String]>::to_vec);

    view! {
        <div class="card report-card fade-in-up">
            <div class="report-header">
                <div class="report-title">
                    <div class="card-icon">"⚠"</div>
                    <div>
                        <h2>"Disaster Analysis Report"</h2>
                        <p class="text-muted">"Automated scene assessment"</p>
                    </div>
                </div>
                <span class=badge_class>{badge_label}</span>
            </div>

            <div class="report-grid">
                {fields
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="report-field">
                            <span class="field-label">{label}</span>
                            <p class="text-muted">{value}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            {threats.map(|items| view! {
                <ItemList title="Immediate Threats" bullet_class="bullet bullet-danger" items=items />
            })}

            {recommendations.map(|items| view! {
                <ItemList title="Recommendations" bullet_class="bullet bullet-primary" items=items />
            })}
        </div>
    }
}

#[component]
fn ItemList(title: &'static str, bullet_class: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class="report-section">
            <h4>{title}</h4>
            <ul class="report-list">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <li>
                            <span class=bullet_class></span>
                            <p class="text-muted">{item}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
