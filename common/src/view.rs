//! 結果カードの表示状態
//!
//! キャプション/レポートのカードは (値, 読み込み中フラグ) から
//! Loading / Empty / Populated のいずれか1つを描画する。

use crate::types::Severity;

/// 結果カードの表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView<T> {
    Loading,
    Empty,
    Populated(T),
}

impl<T> ResultView<T> {
    /// 読み込み中は値の有無にかかわらず Loading
    pub fn resolve(value: Option<T>, is_loading: bool) -> Self {
        if is_loading {
            return ResultView::Loading;
        }
        match value {
            Some(v) => ResultView::Populated(v),
            None => ResultView::Empty,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResultView::Loading)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResultView::Empty)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResultView<U> {
        match self {
            ResultView::Loading => ResultView::Loading,
            ResultView::Empty => ResultView::Empty,
            ResultView::Populated(v) => ResultView::Populated(f(v)),
        }
    }

    pub fn populated(self) -> Option<T> {
        match self {
            ResultView::Populated(v) => Some(v),
            _ => None,
        }
    }
}

/// 危険度バッジの強調レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Emphasis {
    Neutral,
    Calm,
    Caution,
    Alert,
    Critical,
}

impl Emphasis {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Unknown => Emphasis::Neutral,
            Severity::Low => Emphasis::Calm,
            Severity::Medium => Emphasis::Caution,
            Severity::High => Emphasis::Alert,
            Severity::Critical => Emphasis::Critical,
        }
    }

    /// Web版のバッジCSSクラス
    pub fn css_class(&self) -> &'static str {
        match self {
            Emphasis::Neutral => "badge badge-neutral",
            Emphasis::Calm => "badge badge-calm",
            Emphasis::Caution => "badge badge-caution",
            Emphasis::Alert => "badge badge-alert",
            Emphasis::Critical => "badge badge-critical glow",
        }
    }

    /// CLI版のバッジ記号
    pub fn terminal_marker(&self) -> &'static str {
        match self {
            Emphasis::Neutral => "[ ? ]",
            Emphasis::Calm => "[ . ]",
            Emphasis::Caution => "[ ! ]",
            Emphasis::Alert => "[!! ]",
            Emphasis::Critical => "[!!!]",
        }
    }
}
