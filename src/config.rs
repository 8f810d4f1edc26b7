use crate::error::{AppError, Result};
use disaster_scene_common::config::validate_endpoint;
use disaster_scene_common::AppConfig;
use std::path::{Path, PathBuf};

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "DISASTER_SCENE_ENDPOINT";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub app: AppConfig,
    path: Option<PathBuf>,
}

impl Config {
    /// ~/.config/disaster-scene/config.json から読み込み
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        let app = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            AppConfig::from_json(&content)?
        } else {
            AppConfig::default()
        };

        Ok(Self {
            app,
            path: Some(path.to_path_buf()),
        })
    }

    /// 読み込めない設定ファイルは既定値で置き換える（`config` コマンドでの修復用）
    pub fn load_lenient() -> Result<Self> {
        let config_path = Self::config_path()?;
        Ok(Self::load_from_lenient(&config_path))
    }

    pub fn load_from_lenient(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "設定ファイルを読み込めないため既定値を使用: {}", e);
            Self {
                app: AppConfig::default(),
                path: Some(path.to_path_buf()),
            }
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = match &self.path {
            Some(path) => path.clone(),
            None => Self::config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.app)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("disaster-scene").join("config.json"))
    }

    pub fn set_endpoint(&mut self, url: &str) -> Result<()> {
        self.app.endpoint_url = validate_endpoint(url)?;
        self.save()
    }

    /// 実際に使うエンドポイント
    ///
    /// 優先順位: --endpoint > 環境変数 > 設定ファイル > 既定値
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> Result<String> {
        if let Some(url) = flag {
            return Ok(validate_endpoint(url)?);
        }

        if let Ok(url) = std::env::var(ENDPOINT_ENV) {
            if !url.trim().is_empty() {
                return Ok(validate_endpoint(&url)?);
            }
        }

        Ok(self.app.endpoint_url.clone())
    }
}
