//! ファイル選択ルール
//!
//! 受け付けるのは .png / .jpg / .jpeg の画像1枚のみ。
//! 複数ファイルが渡された場合は最初に受け付け可能なものだけを採用し、残りは無視する。

/// 対応拡張子
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// `<input type="file">` の accept 属性
pub const ACCEPT_ATTRIBUTE: &str = "image/png,image/jpeg,.png,.jpg,.jpeg";

/// 表示用の上限（検証はしない）
pub const ADVISORY_MAX_SIZE: &str = "Max 200MB";

/// 選択候補となるファイル
pub trait PickedFile {
    fn file_name(&self) -> String;

    /// MIMEタイプ（不明なら空文字）
    fn mime_type(&self) -> String {
        String::new()
    }

    fn size_bytes(&self) -> u64;
}

/// ファイル名とMIMEタイプが受け付け可能か判定
pub fn is_accepted(file_name: &str, mime_type: &str) -> bool {
    if !mime_type.is_empty() && !mime_type.starts_with("image/") {
        return false;
    }

    match file_name.rsplit_once('.') {
        Some((_, ext)) => ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// 1回の操作で渡されたファイル群から1枚を選ぶ
pub fn pick_single<F, I>(files: I) -> Option<F>
where
    F: PickedFile,
    I: IntoIterator<Item = F>,
{
    files
        .into_iter()
        .find(|f| is_accepted(&f.file_name(), &f.mime_type()))
}

/// バイト数をMB表記に変換（例: "1.50 MB"）
pub fn format_megabytes(size_bytes: u64) -> String {
    format!("{:.2} MB", size_bytes as f64 / 1024.0 / 1024.0)
}
