//! Span exporter writing OTLP JSON lines to a rotating file.
//!
//! The plugin sandbox has no network access worth relying on, so spans go to
//! disk and are read back offline.

use super::otlp_json::OtlpJsonEncoder;
use super::rotating::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::future::ready;
use std::path::PathBuf;

#[derive(Debug)]
struct JsonFileExporter {
    file: RotatingFile,
    encoder: OtlpJsonEncoder,
    stopped: bool,
}

impl SpanExporter for JsonFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.stopped {
            return Box::pin(ready(Err(TraceError::from("exporter is shut down"))));
        }

        let line = self.encoder.encode_batch(&batch).to_string();
        let result = self
            .file
            .append_line(&line)
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    // The resource is fixed when the encoder is built.
    fn set_resource(&mut self, _resource: &Resource) {}
}

/// Builds a tracer provider that exports every finished span to `file_path`.
///
/// Spans are exported synchronously as they end; the plugin runs on a single
/// thread, so batching would only delay writes.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource, scope: &'static str) -> TracerProvider {
    let exporter = JsonFileExporter {
        file: RotatingFile::new(file_path),
        encoder: OtlpJsonEncoder::new(resource.clone(), scope),
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "Nomorra")]);

        let provider = create_tracer_provider(path.clone(), resource, "Nomorra");
        provider.tracer("test").in_span("open_detail", |_cx| {});

        let contents = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        assert_eq!(
            doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0]["name"],
            "open_detail"
        );
    }
}
