use thiserror::Error;

/// Failures the engine raises synchronously to its immediate caller.
/// There is nothing transient to retry: the pipeline is pure
/// computation, so every error is final for the given inputs. Malformed
/// numeric strings are not represented here; the coercion helpers
/// degrade them to 0 instead of erroring.
#[derive(Debug, Error)]
pub enum ChartError {
    /// `chart_type` is not in the supported enumeration. Raised before
    /// any data processing; the caller renders a fallback panel.
    #[error("unsupported chart type: {0}")]
    UnsupportedKind(String),

    /// Every record's resolved pie value was <= 0 after filtering. An
    /// empty pie is never rendered.
    #[error("no records with a positive value to build a pie chart")]
    EmptyPieData,

    /// The designated render surface is not registered; no chart is
    /// built.
    #[error("render target not found: {0}")]
    MissingTarget(String),
}
