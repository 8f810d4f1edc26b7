//! 選択ファイル

use disaster_scene_common::{format_megabytes, PickedFile};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// ブラウザで選択された画像ファイル
///
/// 同名ファイルを選び直しても別物として扱うため、選択ごとにIDを振る。
#[derive(Clone, Debug)]
pub struct SceneFile {
    id: u64,
    file: web_sys::File,
}

/// ファイル表示用の情報（名前とサイズ）
#[derive(Clone, Debug, PartialEq)]
pub struct FileChip {
    pub name: String,
    pub size_label: String,
}

impl SceneFile {
    pub fn new(file: web_sys::File) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            file,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn as_file(&self) -> &web_sys::File {
        &self.file
    }

    pub fn chip(&self) -> FileChip {
        FileChip {
            name: self.file.name(),
            size_label: format_megabytes(self.size_bytes()),
        }
    }
}

impl PickedFile for SceneFile {
    fn file_name(&self) -> String {
        self.file.name()
    }

    fn mime_type(&self) -> String {
        self.file.type_()
    }

    fn size_bytes(&self) -> u64 {
        self.file.size() as u64
    }
}

/// FileList を SceneFile の列に変換
pub fn from_file_list(files: &web_sys::FileList) -> Vec<SceneFile> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(SceneFile::new)
        .collect()
}
