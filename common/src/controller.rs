//! ページコントローラ
//!
//! 選択ファイル・読み込み中フラグ・キャプション・レポートを保持する状態機械。
//! 通信そのものは各フロントエンド（WASM/CLI）が行い、ここでは
//! `begin_generate` で発行したチケットと結果を `complete` に渡す。
//!
//! 解析中にファイルが差し替え/削除された場合、古いチケットの結果は破棄する。

use crate::types::{AnalysisResponse, Report};
use crate::view::ResultView;

pub const CAPTION_FAILURE: &str = "❌ Failed to generate caption.";
pub const REPORT_FAILURE: &str = "❌ Failed to generate report.";

/// 1回の generate 要求を識別するチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// 解析リクエストの結果
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Success(AnalysisResponse),
    /// 通信エラー・非2xx・不正なレスポンス本文はすべてここ
    Failure(String),
}

/// ページ状態
#[derive(Debug, Clone)]
pub struct PageState<F> {
    selected_file: Option<F>,
    is_loading: bool,
    caption: Option<String>,
    report: Option<Report>,
    request_seq: u64,
    in_flight: Option<RequestTicket>,
}

impl<F> Default for PageState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            is_loading: false,
            caption: None,
            report: None,
            request_seq: 0,
            in_flight: None,
        }
    }
}

impl<F> PageState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn has_file(&self) -> bool {
        self.selected_file.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn caption_view(&self) -> ResultView<&str> {
        ResultView::resolve(self.caption(), self.is_loading)
    }

    pub fn report_view(&self) -> ResultView<&Report> {
        ResultView::resolve(self.report(), self.is_loading)
    }

    /// ファイルを選択（以前の結果はクリア）
    pub fn select(&mut self, file: F) {
        self.selected_file = Some(file);
        self.reset_results();
    }

    /// 選択を解除（結果もクリア）
    pub fn remove(&mut self) {
        self.selected_file = None;
        self.reset_results();
    }

    /// 解析開始
    ///
    /// ファイル未選択、または既に解析中なら `None`（リクエストしない）。
    pub fn begin_generate(&mut self) -> Option<RequestTicket> {
        if self.selected_file.is_none() || self.is_loading {
            return None;
        }

        self.request_seq += 1;
        let ticket = RequestTicket(self.request_seq);
        self.in_flight = Some(ticket);
        self.is_loading = true;
        self.caption = None;
        self.report = None;
        Some(ticket)
    }

    /// 解析完了
    ///
    /// # Returns
    /// 結果を反映した場合は `true`、古いチケットで破棄した場合は `false`
    pub fn complete(&mut self, ticket: RequestTicket, outcome: AnalysisOutcome) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }

        self.in_flight = None;
        self.is_loading = false;
        match outcome {
            AnalysisOutcome::Success(response) => {
                self.caption = Some(response.caption);
                self.report = Some(response.report);
            }
            AnalysisOutcome::Failure(_) => {
                self.caption = Some(CAPTION_FAILURE.to_string());
                self.report = Some(Report::Text(REPORT_FAILURE.to_string()));
            }
        }
        true
    }

    fn reset_results(&mut self) {
        self.caption = None;
        self.report = None;
        self.is_loading = false;
        self.in_flight = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(caption: &str, report: &str) -> AnalysisOutcome {
        AnalysisOutcome::Success(AnalysisResponse {
            caption: caption.to_string(),
            report: Report::from(report),
        })
    }

    fn analyzed_state() -> PageState<&'static str> {
        let mut state = PageState::new();
        state.select("flood.jpg");
        let ticket = state.begin_generate().expect("チケットが発行されない");
        assert!(state.complete(ticket, success("X", "Y")));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = PageState::<&str>::new();
        assert!(!state.has_file());
        assert!(!state.is_loading());
        assert!(state.caption_view().is_empty());
        assert!(state.report_view().is_empty());
    }

    #[test]
    fn test_select_clears_previous_results() {
        let mut state = analyzed_state();
        state.select("fire.png");

        assert_eq!(state.selected_file(), Some(&"fire.png"));
        assert!(state.caption().is_none());
        assert!(state.report().is_none());
    }

    #[test]
    fn test_remove_resets_everything() {
        let mut state = analyzed_state();
        state.remove();

        assert!(state.selected_file().is_none());
        assert!(state.caption().is_none());
        assert!(state.report().is_none());
    }

    #[test]
    fn test_generate_requires_file() {
        let mut state = PageState::<&str>::new();
        assert!(state.begin_generate().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_loading_never_shows_empty_view() {
        let mut state = PageState::new();
        state.select("quake.jpeg");
        state.begin_generate().expect("チケットが発行されない");

        assert!(state.is_loading());
        assert!(state.caption_view().is_loading());
        assert!(state.report_view().is_loading());
        assert!(!state.caption_view().is_empty());
        assert!(!state.report_view().is_empty());
    }

    #[test]
    fn test_success_populates_results() {
        let state = analyzed_state();

        assert!(!state.is_loading());
        assert_eq!(state.caption_view(), ResultView::Populated("X"));
        assert_eq!(state.report().and_then(|r| r.as_text()), Some("Y"));
    }

    #[test]
    fn test_failure_sets_placeholders() {
        let mut state = PageState::new();
        state.select("flood.jpg");
        let ticket = state.begin_generate().unwrap();
        assert!(state.complete(ticket, AnalysisOutcome::Failure("connection refused".into())));

        assert!(!state.is_loading());
        assert_eq!(state.caption(), Some("❌ Failed to generate caption."));
        assert_eq!(
            state.report().and_then(|r| r.as_text()),
            Some("❌ Failed to generate report.")
        );
    }

    #[test]
    fn test_retry_after_failure() {
        let mut state = PageState::new();
        state.select("flood.jpg");
        let first = state.begin_generate().unwrap();
        state.complete(first, AnalysisOutcome::Failure("HTTP 500".into()));

        let second = state.begin_generate().expect("再実行できない");
        assert_ne!(first, second);
        assert!(state.complete(second, success("retry", "ok")));
        assert_eq!(state.caption(), Some("retry"));
    }

    #[test]
    fn test_second_generate_while_loading_is_ignored() {
        let mut state = PageState::new();
        state.select("flood.jpg");
        state.begin_generate().unwrap();
        assert!(state.begin_generate().is_none());
    }

    #[test]
    fn test_stale_response_after_file_change_is_discarded() {
        let mut state = PageState::new();
        state.select("old.jpg");
        let stale = state.begin_generate().unwrap();

        state.select("new.jpg");
        assert!(!state.is_loading());

        assert!(!state.complete(stale, success("old caption", "old report")));
        assert!(state.caption().is_none());
        assert!(state.report().is_none());
        assert_eq!(state.selected_file(), Some(&"new.jpg"));
    }

    #[test]
    fn test_stale_response_after_remove_is_discarded() {
        let mut state = PageState::new();
        state.select("old.jpg");
        let stale = state.begin_generate().unwrap();
        state.remove();

        assert!(!state.complete(stale, AnalysisOutcome::Failure("late".into())));
        assert!(state.caption().is_none());
    }
}
