//! メインアプリケーションコンポーネント
//!
//! ページ状態（PageState）を1つのシグナルで保持し、
//! ファイル選択 → 解析リクエスト → 結果表示 を組み立てる。

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::analyze::analyze_image;
use crate::components::{
    caption_display::CaptionDisplay,
    features::Features,
    file_upload::FileUpload,
    generate_button::GenerateButton,
    header::Header,
    image_preview::ImagePreview,
    report_display::ReportDisplay,
};
use crate::config::app_config;
use crate::scene_file::SceneFile;
use disaster_scene_common::{AnalysisOutcome, PageState, Report, ResultView};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let endpoint = StoredValue::new(app_config().endpoint_url);
    let page = RwSignal::new_local(PageState::<SceneFile>::new());

    let has_file = Signal::derive(move || page.with(PageState::has_file));
    let is_loading = Signal::derive(move || page.with(PageState::is_loading));
    let selected_chip = Signal::derive(move || page.with(|p| p.selected_file().map(SceneFile::chip)));
    let caption_view: Signal<ResultView<String>> =
        Signal::derive(move || page.with(|p| p.caption_view().map(str::to_string)));
    let report_view: Signal<ResultView<Report>> =
        Signal::derive(move || page.with(|p| p.report_view().map(Report::clone)));

    // ファイルが変わったときだけプレビューを作り直す
    let file_key = Memo::new(move |_| page.with(|p| p.selected_file().map(SceneFile::id)));

    let on_file_select = move |file: SceneFile| {
        page.update(|p| p.select(file));
    };

    let on_remove_file = move |_| {
        page.update(|p| p.remove());
    };

    let on_generate = move |_| {
        let mut request = None;
        page.update(|p| {
            if let Some(ticket) = p.begin_generate() {
                request = p.selected_file().cloned().map(|file| (ticket, file));
            }
        });
        let Some((ticket, file)) = request else {
            return;
        };

        let endpoint = endpoint.get_value();
        spawn_local(async move {
            let outcome = match analyze_image(&endpoint, file.as_file()).await {
                Ok(response) => AnalysisOutcome::Success(response),
                Err(e) => {
                    gloo::console::error!("Error analyzing image:", e.clone());
                    AnalysisOutcome::Failure(e)
                }
            };

            let mut applied = false;
            page.update(|p| applied = p.complete(ticket, outcome));
            if !applied {
                gloo::console::log!("Discarded analysis result for a replaced file");
            }
        });
    };

    view! {
        <div class="app">
            <Header />

            <main class="container">
                <section class="upload-section">
                    <div class="section-title">
                        <h2>"Upload Disaster Scene Image"</h2>
                        <p class="text-muted">"Get instant AI-powered analysis of emergency situations"</p>
                    </div>

                    <FileUpload
                        selected=selected_chip
                        is_loading=is_loading
                        on_file_select=on_file_select
                        on_remove_file=on_remove_file
                    />
                </section>

                <Show
                    when=move || has_file.get()
                    fallback=|| view! { <Features /> }
                >
                    <GenerateButton is_loading=is_loading on_generate=on_generate />

                    <div class="results-grid fade-in-up">
                        <div class="results-column">
                            {move || {
                                file_key
                                    .get()
                                    .and_then(|_| page.with_untracked(|p| p.selected_file().cloned()))
                                    .map(|file| view! { <ImagePreview file=file /> })
                            }}
                            <CaptionDisplay state=caption_view />
                        </div>
                        <div class="results-column">
                            <ReportDisplay state=report_view />
                        </div>
                    </div>
                </Show>
            </main>
        </div>
    }
}
