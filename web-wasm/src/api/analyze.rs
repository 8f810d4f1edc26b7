//! 解析API連携
//!
//! 選択画像を FormData（フィールド名 `file`）で POST する。
//! 非2xx・通信エラー・不正なレスポンス本文はすべて Err。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};
use disaster_scene_common::{parse_analysis_response, AnalysisResponse, UPLOAD_FIELD_NAME};

/// 画像を送信して解析結果を取得
pub async fn analyze_image(endpoint: &str, file: &web_sys::File) -> Result<AnalysisResponse, String> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())
        .map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(format!("API error: {}", resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| "response body is not text".to_string())?;

    parse_analysis_response(&text).map_err(|e| e.to_string())
}

fn js_error(value: JsValue) -> String {
    format!("{:?}", value)
}
