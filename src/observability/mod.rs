//! Tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros -> tracing-opentelemetry -> opentelemetry_sdk -> JsonFileExporter -> nomorra-otlp.json
//! ```
//!
//! Spans land in `~/.local/share/zellij/nomorra/nomorra-otlp.json` as one OTLP
//! JSON document per line. The file rotates at 10 MB and the three newest
//! backups are kept, suffixed with a local timestamp.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`. Any `EnvFilter` directive works, e.g. `nomorra::search=trace`.

mod exporter;
mod init;
mod otlp_json;
mod rotating;

pub use init::{init_tracing, trace_file_path, TRACE_FILE_NAME};

/// Service and instrumentation scope name attached to every exported span.
pub const SERVICE_NAME: &str = "Nomorra";
