use crate::config::{ChartConfig, ChartKind};
use crate::data::{Dataset, Record};
use crate::error::ChartError;
use anyhow::Context;
use serde::Deserialize;

/// One backend answer to a query: prose, optional tabular data, and an
/// optional chart recommendation over that data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiResponse {
    pub text: Option<String>,
    pub html: Option<String>,
    pub data: Option<Vec<Record>>,
    pub chart_type: Option<String>,
    pub chart_config: Option<ChartConfig>,
    pub sql: Option<String>,
    /// Free-form result of a write operation; shape is backend-defined.
    pub operation_result: Option<serde_json::Value>,
}

impl ApiResponse {
    /// Extract a chart request, if this response carries one.
    ///
    /// Returns `None` when there is no chart to draw (no kind, or no
    /// rows), and `Some(Err)` when a kind is named but unsupported.
    pub fn chart_request(&self) -> Option<Result<(Dataset, ChartKind, ChartConfig), ChartError>> {
        let kind = self.chart_type.as_deref()?;
        let records = self.data.as_ref()?;
        if records.is_empty() {
            return None;
        }
        let dataset = Dataset::new(records.clone());
        let config = self.chart_config.clone().unwrap_or_default();
        Some(kind.parse().map(|kind| (dataset, kind, config)))
    }
}

/// Terminator line in a streaming response body.
pub const DONE_SENTINEL: &str = "[DONE]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    Thinking,
    Answer,
    Error,
}

/// One frame of a streamed answer.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamFrame {
    #[serde(rename = "type")]
    pub kind: FrameKind,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone)]
pub enum StreamEvent {
    Frame(StreamFrame),
    Done,
}

/// Parse one line of a streaming body. Lines may carry an SSE-style
/// `data:` prefix; blank lines are keep-alives and yield nothing.
pub fn parse_stream_line(line: &str) -> anyhow::Result<Option<StreamEvent>> {
    let payload = line
        .strip_prefix("data:")
        .map(str::trim_start)
        .unwrap_or(line)
        .trim();
    if payload.is_empty() {
        return Ok(None);
    }
    if payload == DONE_SENTINEL {
        return Ok(Some(StreamEvent::Done));
    }
    let frame: StreamFrame = serde_json::from_str(payload)
        .with_context(|| format!("malformed stream frame: {}", payload))?;
    Ok(Some(StreamEvent::Frame(frame)))
}
