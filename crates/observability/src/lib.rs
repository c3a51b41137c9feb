//! Tracing and logging (shared setup for every binary in the workspace).

/// Initialize process-wide logging from the environment.
///
/// `RUST_LOG` selects the filter (default `info`); `STOCKROOM_LOG_FORMAT`
/// selects `json` (default) or `pretty` output.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let format = std::env::var("STOCKROOM_LOG_FORMAT")
        .ok()
        .and_then(|v| LogFormat::parse(&v))
        .unwrap_or_default();
    tracing::init(format);
}

/// Log line encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" | "text" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Subscriber configuration (filters, layers).
pub mod tracing;
