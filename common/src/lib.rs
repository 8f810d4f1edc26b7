//! Disaster Scene Common Library
//!
//! CLIとWeb(WASM)で共有される型・ページ状態・表示ルール

pub mod types;
pub mod error;
pub mod config;
pub mod parser;
pub mod selection;
pub mod view;
pub mod controller;

pub use types::{AnalysisResponse, DisasterReport, Report, Severity};
pub use error::{Error, Result};
pub use config::{AppConfig, DEFAULT_ENDPOINT_URL, UPLOAD_FIELD_NAME};
pub use parser::{extract_json_object, parse_analysis_response, promote_report};
pub use selection::{format_megabytes, is_accepted, pick_single, PickedFile};
pub use view::{Emphasis, ResultView};
pub use controller::{AnalysisOutcome, PageState, RequestTicket, CAPTION_FAILURE, REPORT_FAILURE};
