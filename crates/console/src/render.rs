//! Response rendering.
//!
//! Formats a dispatch outcome into the text shown in the output region,
//! matching the three outcome paths exhaustively.

use std::fmt::Write;

use probe_application::TransportError;
use probe_domain::TestResult;

/// A rendered outcome ready for the output region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    /// Display text.
    pub text: String,
    /// True when the text should be shown error-styled.
    pub error: bool,
}

impl RenderedOutput {
    fn error_line(message: &str) -> Self {
        Self {
            text: format!("Error: {message}"),
            error: true,
        }
    }
}

/// Renders a dispatch outcome into display text.
///
/// Never fails: headers that cannot be pretty-printed are omitted rather
/// than aborting the render, and the body is shown verbatim even when it
/// is itself structured data.
#[must_use]
pub fn render(outcome: &Result<TestResult, TransportError>) -> RenderedOutput {
    match outcome {
        Ok(TestResult::Success {
            status_code,
            headers,
            body,
        }) => {
            let mut text = format!("Status Code: {status_code}\n\n");
            if let Some(headers) = headers
                && let Ok(pretty) = serde_json::to_string_pretty(headers)
            {
                let _ = write!(text, "Headers:\n{pretty}\n\n");
            }
            let _ = write!(text, "Response Body:\n{body}");
            RenderedOutput { text, error: false }
        }
        Ok(TestResult::Failure { error }) => RenderedOutput::error_line(error),
        Err(transport) => RenderedOutput::error_line(&transport.to_string()),
    }
}
