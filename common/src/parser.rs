//! APIレスポンスパーサー
//!
//! /analyze/ のレスポンス本文を AnalysisResponse に変換する。
//! レポートがテキストで、その内容全体が構造化レポートのJSONである
//! 場合だけ Report::Structured に昇格させる。

use crate::error::{Error, Result};
use crate::types::{AnalysisResponse, DisasterReport, Report};

/// テキスト全体がJSONオブジェクトならその部分を返す
///
/// 受け付ける形:
/// 1. 全体が1つの ```json ... ``` ブロック
/// 2. 全体が {...}
///
/// 前後に文章が付いている場合はエラー。
///
/// # Examples
/// ```
/// use disaster_scene_common::extract_json_object;
///
/// let json = extract_json_object("  {\"disasterType\": \"Fire\"}\n").unwrap();
/// assert!(json.starts_with('{'));
/// assert!(extract_json_object("Report follows: {\"disasterType\": \"Fire\"}").is_err());
/// ```
pub fn extract_json_object(text: &str) -> Result<&str> {
    let text = text.trim();

    let body = match text.strip_prefix("```json") {
        Some(rest) => match rest.strip_suffix("```") {
            Some(inner) if !inner.contains("```") => inner.trim(),
            _ => return Err(Error::Parse("unterminated json block".into())),
        },
        None => text,
    };

    if body.starts_with('{') && body.ends_with('}') {
        Ok(body)
    } else {
        Err(Error::Parse("JSON object not found".into()))
    }
}

/// レスポンス本文をパース
///
/// # Returns
/// * `Ok(AnalysisResponse)` - パース成功（必要に応じてレポートを昇格済み）
/// * `Err` - JSONとして不正、または caption/report が欠けている
pub fn parse_analysis_response(body: &str) -> Result<AnalysisResponse> {
    let response: AnalysisResponse = serde_json::from_str(body.trim())?;
    Ok(promote_report(response))
}

/// テキストレポートの内容全体が構造化レポートなら昇格させる
pub fn promote_report(response: AnalysisResponse) -> AnalysisResponse {
    let AnalysisResponse { caption, report } = response;
    let report = match report {
        Report::Text(text) => match structured_from_text(&text) {
            Some(structured) => Report::Structured(structured),
            None => Report::Text(text),
        },
        structured => structured,
    };
    AnalysisResponse { caption, report }
}

fn structured_from_text(text: &str) -> Option<DisasterReport> {
    let json = extract_json_object(text).ok()?;
    serde_json::from_str(json).ok()
}
