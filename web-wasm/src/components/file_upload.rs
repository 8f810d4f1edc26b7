//! ファイルアップロードコンポーネント
//!
//! ドラッグ&ドロップまたはクリックで画像を1枚選ぶ。
//! 対象外のファイルや2枚目以降は黙って無視する。解析中は入力を受け付けない。

use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};
use disaster_scene_common::pick_single;
use disaster_scene_common::selection::{ACCEPT_ATTRIBUTE, ADVISORY_MAX_SIZE};
use crate::scene_file::{from_file_list, FileChip, SceneFile};

#[component]
pub fn FileUpload<FS, FR>(
    #[prop(into)] selected: Signal<Option<FileChip>>,
    #[prop(into)] is_loading: Signal<bool>,
    on_file_select: FS,
    on_remove_file: FR,
) -> impl IntoView
where
    FS: Fn(SceneFile) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let handle_files = move |files: Vec<SceneFile>| {
        if is_loading.get_untracked() {
            return;
        }
        if let Some(file) = pick_single(files) {
            on_file_select(file);
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                handle_files(from_file_list(&files));
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_loading.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if is_loading.get_untracked() {
            return;
        }
        // ファイル選択ダイアログを開く
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            handle_files(from_file_list(&files));
        }
        // 同じファイルを選び直しても change が発火するようにする
        input.set_value("");
    };

    let dropzone = move || {
        let mut classes = vec!["upload-area"];
        if is_dragover.get() {
            classes.push("dragover");
        }
        if is_loading.get() {
            classes.push("disabled");
        }
        classes.join(" ")
    };

    view! {
        <Show
            when=move || selected.with(Option::is_some)
            fallback=move || view! {
                <div
                    class=dropzone
                    on:drop=on_drop.clone()
                    on:dragover=on_dragover.clone()
                    on:dragleave=on_dragleave.clone()
                    on:click=on_click.clone()
                >
                    <input
                        node_ref=input_ref
                        type="file"
                        accept=ACCEPT_ATTRIBUTE
                        class="hidden"
                        disabled=move || is_loading.get()
                        on:change=on_change.clone()
                        on:click=|ev| ev.stop_propagation()
                    />
                    <div class="upload-icon">"⬆"</div>
                    <h3>
                        {move || if is_dragover.get() {
                            "Drop your image here"
                        } else {
                            "Upload Disaster Scene Image"
                        }}
                    </h3>
                    <p class="text-muted">"Drag and drop your image here, or click to browse"</p>
                    <p class="text-muted text-small">
                        {format!("Supports: JPG, JPEG, PNG ({})", ADVISORY_MAX_SIZE)}
                    </p>
                </div>
            }
        >
            {
                let on_remove_file = on_remove_file.clone();
                move || selected.get().map(|chip| {
                    let on_remove_file = on_remove_file.clone();
                    view! {
                        <div class="card file-chip scale-in">
                            <div class="file-chip-info">
                                <div class="card-icon">"🖼"</div>
                                <div>
                                    <p class="file-name">{chip.name}</p>
                                    <p class="text-muted text-small">{chip.size_label}</p>
                                </div>
                            </div>
                            <button
                                class="btn btn-icon btn-danger"
                                title="Remove file"
                                disabled=move || is_loading.get()
                                on:click=move |_| {
                                    if !is_loading.get_untracked() {
                                        on_remove_file(());
                                    }
                                }
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
            }
        </Show>
    }
}
