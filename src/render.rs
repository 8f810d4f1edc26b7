//! 端末向けカード描画
//!
//! 描画は (表示状態) だけで決まる純粋関数。

use disaster_scene_common::{DisasterReport, Emphasis, Report, ResultView};

const RULE: &str = "────────────────────────────────────────";
const SKELETON_LONG: &str = "░░░░░░░░░░░░░░░░░░░░░░░░░░░░";
const SKELETON_SHORT: &str = "░░░░░░░░░░░░░░░░░░";

pub fn render_caption(view: ResultView<&str>) -> String {
    let mut out = Card::default();
    match view {
        ResultView::Loading => {
            out.header("⏳ Generating Caption", None);
            out.indented(SKELETON_LONG);
            out.indented(SKELETON_SHORT);
        }
        ResultView::Empty => {
            out.header("💬 Scene Caption", None);
            out.indented("Upload an image to generate an automatic scene description.");
        }
        ResultView::Populated(caption) => {
            out.header("💬 Scene Caption", None);
            out.indented(caption);
        }
    }
    out.into_string()
}

pub fn render_report(view: ResultView<&Report>) -> String {
    let mut out = Card::default();
    match view {
        ResultView::Loading => {
            out.header(
                "⏳ Generating Analysis Report",
                Some("Processing disaster scene data..."),
            );
            for _ in 0..5 {
                out.indented(SKELETON_SHORT);
                out.indented(SKELETON_LONG);
            }
        }
        ResultView::Empty => {
            out.header("⚠ No Analysis Available", None);
            out.indented("Upload an image and click \"Generate Report\" to begin analysis.");
        }
        ResultView::Populated(Report::Text(text)) => {
            out.header("📝 Disaster Report", None);
            for text_line in text.lines() {
                out.indented(text_line);
            }
        }
        ResultView::Populated(Report::Structured(report)) => render_structured(&mut out, report),
    }
    out.into_string()
}

fn render_structured(out: &mut Card, report: &DisasterReport) {
    let emphasis = Emphasis::for_severity(report.severity);
    out.header("⚠ Disaster Analysis Report", Some("Automated scene assessment"));
    out.indented(&format!("{} {}", emphasis.terminal_marker(), report.severity.badge_label()));
    out.blank();

    for (label, value) in report.fields() {
        out.indented(label);
        out.line(&format!("      {}", value));
    }

    for (title, items) in [
        ("Immediate Threats", report.threats_section()),
        ("Recommendations", report.recommendations_section()),
    ] {
        if let Some(items) = items {
            out.blank();
            out.indented(title);
            for item in items {
                out.line(&format!("    • {}", item));
            }
        }
    }
}

/// 行単位で組み立てるカード本文
#[derive(Default)]
struct Card(String);

impl Card {
    fn line(&mut self, text: &str) {
        self.0.push_str(text);
        self.0.push('\n');
    }

    fn indented(&mut self, text: &str) {
        self.0.push_str("  ");
        self.line(text);
    }

    fn blank(&mut self) {
        self.0.push('\n');
    }

    fn header(&mut self, title: &str, subtitle: Option<&str>) {
        self.line(RULE);
        self.line(title);
        if let Some(sub) = subtitle {
            self.line(sub);
        }
        self.line(RULE);
    }

    fn into_string(self) -> String {
        self.0
    }
}
