//! Object URL の取得と解放
//!
//! `ObjectUrl` が破棄されると URL.revokeObjectURL で解放される。

use wasm_bindgen::JsValue;
use web_sys::{Blob, Url};

pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn create(blob: &Blob) -> Result<Self, JsValue> {
        let url = Url::create_object_url_with_blob(blob)?;
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.url) {
            gloo::console::warn!(format!("revokeObjectURL failed: {:?}", e));
        }
    }
}
