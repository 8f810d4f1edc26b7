//! 解析API連携
//!
//! 選択画像を multipart（フィールド名 `file`）で POST し、
//! caption / report を受け取る。タイムアウトとリトライはない。

use crate::error::{AppError, Result};
use crate::selection::SelectedImage;
use disaster_scene_common::{parse_analysis_response, AnalysisOutcome, AnalysisResponse, UPLOAD_FIELD_NAME};
use reqwest::multipart::{Form, Part};

pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 画像を送信して解析結果を取得
    pub async fn analyze(&self, image: &SelectedImage) -> Result<AnalysisResponse> {
        let bytes = tokio::fs::read(&image.path).await?;
        let part = Part::bytes(bytes)
            .file_name(image.file_name.clone())
            .mime_str(image.mime())?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        tracing::debug!(endpoint = %self.endpoint, file = %image.file_name, size = image.size, "sending analysis request");

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "analysis response received");

        Ok(parse_analysis_response(&body)?)
    }

    /// 失敗をすべて AnalysisOutcome::Failure にまとめる
    pub async fn run(&self, image: &SelectedImage) -> AnalysisOutcome {
        match self.analyze(image).await {
            Ok(response) => AnalysisOutcome::Success(response),
            Err(e) => {
                tracing::warn!(error = %e, "error analyzing image");
                AnalysisOutcome::Failure(e.to_string())
            }
        }
    }
}
