//! プレビュー情報
//!
//! 端末では画像そのものは表示できないため、デコードできたかどうかと
//! 画像サイズをプレビューとして扱う。

use crate::selection::SelectedImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    /// デコード完了
    Ready { width: u32, height: u32 },
    /// デコードできなかった（送信はそのまま行う）
    Unavailable,
}

pub fn load_preview(selected: &SelectedImage) -> Preview {
    match image::image_dimensions(&selected.path) {
        Ok((width, height)) => Preview::Ready { width, height },
        Err(e) => {
            tracing::debug!(file = %selected.file_name, error = %e, "preview decode failed");
            Preview::Unavailable
        }
    }
}

impl Preview {
    pub fn describe(&self) -> String {
        match self {
            Preview::Ready { width, height } => format!("{}x{} px • Ready for analysis", width, height),
            Preview::Unavailable => "Preview unavailable • Ready for analysis".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_preview_of_real_png() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("scene.png");
        image::RgbImage::new(4, 3).save(&path).unwrap();

        let selected = SelectedImage::open(&path).unwrap();
        assert_eq!(load_preview(&selected), Preview::Ready { width: 4, height: 3 });
        assert_eq!(load_preview(&selected).describe(), "4x3 px • Ready for analysis");
    }

    #[test]
    fn test_preview_of_corrupt_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not really a jpeg").unwrap();

        let selected = SelectedImage::open(&path).unwrap();
        assert_eq!(load_preview(&selected), Preview::Unavailable);
    }
}
