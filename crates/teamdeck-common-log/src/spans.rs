//! Span helpers for decision tracing.

use tracing::{info_span, Span};

/// Create a span around a single authorization decision.
pub fn decision_span(action: &str, user_id: &str) -> Span {
    info_span!(
        "decision",
        action = %action,
        user = %user_id,
        error = tracing::field::Empty
    )
}

/// Create a span around loading or querying a snapshot.
pub fn snapshot_span(source: &str) -> Span {
    info_span!(
        "snapshot",
        source = %source,
        error = tracing::field::Empty
    )
}

/// Record an error on the current span.
pub fn record_error(error: &dyn std::error::Error) {
    Span::current().record("error", tracing::field::display(error));
}

/// Timing utility for operations.
pub struct Timer {
    start: std::time::Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer.
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: std::time::Instant::now(),
            operation,
        }
    }

    /// Complete the timer and record duration.
    pub fn finish(self) {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.operation,
            duration_us = %duration.as_micros(),
            "operation completed"
        );
    }
}

/// Macro for timing a block of code.
#[macro_export]
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        let _timer = $crate::spans::Timer::start($name);
        let result = $body;
        _timer.finish();
        result
    }};
}
