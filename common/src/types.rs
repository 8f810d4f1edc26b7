//! 解析結果の型定義
//!
//! WebとCLIで共有される型:
//! - AnalysisResponse: /analyze/ の成功レスポンス
//! - Report: 自由記述テキスト、または構造化された災害レポート
//! - Severity: 危険度（Low < Medium < High < Critical）

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 解析APIの成功レスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub caption: String,
    pub report: Report,
}

/// 災害レポート
///
/// 現行のバックエンドはテキストを返すが、構造化オブジェクトも受け付ける。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Report {
    Structured(DisasterReport),
    Text(String),
}

impl Report {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Report::Text(text) => Some(text),
            Report::Structured(_) => None,
        }
    }

    pub fn as_structured(&self) -> Option<&DisasterReport> {
        match self {
            Report::Structured(report) => Some(report),
            Report::Text(_) => None,
        }
    }
}

impl From<String> for Report {
    fn from(text: String) -> Self {
        Report::Text(text)
    }
}

impl From<&str> for Report {
    fn from(text: &str) -> Self {
        Report::Text(text.to_string())
    }
}

/// 構造化された災害レポート
///
/// `disasterType` と `severity` は必須。それ以外は欠けていても空として扱う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterReport {
    pub disaster_type: String,

    pub severity: Severity,

    #[serde(default)]
    pub human_presence: String,

    #[serde(default)]
    pub casualties: String,

    #[serde(default)]
    pub environmental_conditions: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub time_of_day: String,

    #[serde(default)]
    pub visibility: String,

    #[serde(default)]
    pub immediate_threats: Vec<String>,

    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl DisasterReport {
    /// 「Immediate Threats」セクション（空なら描画しない）
    pub fn threats_section(&self) -> Option<&[String]> {
        non_empty(&self.immediate_threats)
    }

    /// 「Recommendations」セクション（空なら描画しない）
    pub fn recommendations_section(&self) -> Option<&[String]> {
        non_empty(&self.recommendations)
    }

    /// 見出し付きの基本情報（表示順）
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("Disaster Type", &self.disaster_type),
            ("Human Presence", &self.human_presence),
            ("Location Context", &self.location),
            ("Time of Day", &self.time_of_day),
            ("Environmental Conditions", &self.environmental_conditions),
            ("Casualty Assessment", &self.casualties),
            ("Visibility", &self.visibility),
        ]
    }
}

fn non_empty(items: &[String]) -> Option<&[String]> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// 危険度
///
/// 未知の値は `Unknown` として受け取り、Low より下に並ぶ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// 並び順（Unknown が最小）
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Unknown => 0,
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Unknown => "Unknown",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    /// バッジ表記（例: "Critical Risk"）
    pub fn badge_label(&self) -> String {
        format!("{} Risk", self.as_str())
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
