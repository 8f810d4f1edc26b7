//! 解析対象ファイルの選択
//!
//! CLIでは黙って無視する手段がないため、対象外のファイルはエラーにする。

use crate::error::{AppError, Result};
use disaster_scene_common::{format_megabytes, is_accepted, PickedFile};
use std::path::{Path, PathBuf};

/// 選択された画像
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
}

impl SelectedImage {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AppError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if !is_accepted(&file_name, "") {
            return Err(AppError::UnsupportedFile(file_name));
        }

        let size = std::fs::metadata(path)?.len();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            size,
        })
    }

    /// 拡張子から決めたMIMEタイプ
    pub fn mime(&self) -> &'static str {
        mime_for_file_name(&self.file_name)
    }

    /// 表示用 "name • 1.23 MB"
    pub fn label(&self) -> String {
        format!("{} • {}", self.file_name, format_megabytes(self.size))
    }
}

impl PickedFile for SelectedImage {
    fn file_name(&self) -> String {
        self.file_name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime().to_string()
    }

    fn size_bytes(&self) -> u64 {
        self.size
    }
}

pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else {
        "image/jpeg"
    }
}
