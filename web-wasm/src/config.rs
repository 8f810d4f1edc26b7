//! ビルド時設定
//!
//! `DISASTER_SCENE_ENDPOINT` をビルド時に指定するとエンドポイントを差し替えられる。

use disaster_scene_common::{AppConfig, DEFAULT_ENDPOINT_URL};

pub fn app_config() -> AppConfig {
    let url = option_env!("DISASTER_SCENE_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT_URL);
    match AppConfig::with_endpoint(url) {
        Ok(config) => config,
        Err(e) => {
            gloo::console::warn!(format!("{}; falling back to {}", e, DEFAULT_ENDPOINT_URL));
            AppConfig::default()
        }
    }
}
