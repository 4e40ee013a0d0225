use std::fmt;

use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// `2024-05-01 14:03:27,512`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Event field carrying a pre-formatted [`TIMESTAMP_FORMAT`] time.
pub const RECORDED_AT_FIELD: &str = "recorded_at";

/// Formats every event as `<timestamp> - <LEVEL> - <message>`.
///
/// The timestamp is taken from the event's `recorded_at` field when it has
/// one, so every sink writes the moment the record was created. Other events
/// are stamped with the current local time. Only the message is written;
/// remaining structured fields are not part of the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLineFormat;

impl<S, N> FormatEvent<S, N> for LogLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let timestamp = visitor
            .recorded_at
            .unwrap_or_else(|| Local::now().format(TIMESTAMP_FORMAT).to_string());
        writeln!(writer, "{timestamp} - {} - {}", event.metadata().level(), visitor.message)
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    recorded_at: Option<String>,
}

impl MessageVisitor {
    fn capture(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = value,
            RECORDED_AT_FIELD => self.recorded_at = Some(value),
            _ => {}
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.capture(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if matches!(field.name(), "message" | RECORDED_AT_FIELD) {
            self.capture(field, format!("{value:?}"));
        }
    }
}
