//! 画像プレビューコンポーネント
//!
//! マウント時に Object URL を取得し、ファイル差し替え・アンマウント時に解放する。
//! デコード完了までは読み込み中の表示。

use leptos::prelude::*;
use crate::object_url::ObjectUrl;
use crate::scene_file::SceneFile;

#[component]
pub fn ImagePreview(file: SceneFile) -> impl IntoView {
    let (is_loaded, set_is_loaded) = signal(false);

    let object_url = match ObjectUrl::create(file.as_file()) {
        Ok(url) => Some(url),
        Err(e) => {
            gloo::console::error!(format!("createObjectURL failed: {:?}", e));
            None
        }
    };
    let src = object_url
        .as_ref()
        .map(|url| url.as_str().to_string())
        .unwrap_or_default();

    let handle = StoredValue::new_local(object_url);
    on_cleanup(move || {
        handle.try_update_value(|url| {
            url.take();
        });
    });

    let chip = file.chip();

    view! {
        <div class="card preview-card">
            <div class="preview-frame">
                <Show when=move || !is_loaded.get()>
                    <div class="preview-placeholder">
                        <span class="pulse">"🖼"</span>
                    </div>
                </Show>
                <img
                    src=src
                    alt="Disaster scene preview"
                    class=move || if is_loaded.get() { "preview-img loaded" } else { "preview-img" }
                    on:load=move |_| set_is_loaded.set(true)
                />
            </div>
            <div class="preview-footer">
                <div>
                    <h3>"Scene Analysis"</h3>
                    <p class="text-muted">{format!("{} • {}", chip.name, chip.size_label)}</p>
                </div>
                <div class="ready-indicator">
                    <span class="dot pulse"></span>
                    <span class="text-muted">"Ready for analysis"</span>
                </div>
            </div>
        </div>
    }
}
