//! 解析エンドポイント設定
//!
//! 認識するオプションは `endpointUrl` のみ。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 既定の解析エンドポイント
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:8000/analyze/";

/// multipart のフィールド名
pub const UPLOAD_FIELD_NAME: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
        }
    }
}

impl AppConfig {
    /// 指定URLで設定を作成（検証付き）
    pub fn with_endpoint(url: &str) -> Result<Self> {
        let endpoint_url = validate_endpoint(url)?;
        Ok(Self { endpoint_url })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        config.endpoint_url = validate_endpoint(&config.endpoint_url)?;
        Ok(config)
    }
}

/// エンドポイントURLを検証して正規化（前後の空白を除去）
pub fn validate_endpoint(url: &str) -> Result<String> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::Config("endpointUrl is empty".into()));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(Error::Config(format!(
            "endpointUrl must start with http:// or https://: {}",
            url
        )));
    }
    Ok(url.to_string())
}
