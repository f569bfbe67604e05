//! Bridge from the `tracing` macros into the logger registry.
//!
//! Every event is routed to the logger named after its target, so
//! `tracing::info!("...")` inside `tardis_em::utils` reaches the handlers of
//! `tardis_em.utils`, `tardis_em` and so on up the hierarchy.

use crate::registry::{self, LoggerRegistry};
use std::fmt::{self, Write as _};
use std::sync::{Arc, Once};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

static INSTALL: Once = Once::new();

pub struct RegistryLayer {
    registry: Arc<LoggerRegistry>,
}

impl RegistryLayer {
    pub fn new(registry: Arc<LoggerRegistry>) -> Self {
        Self { registry }
    }
}

impl<S: Subscriber> Layer<S> for RegistryLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !self.registry.is_enabled(metadata.target(), *metadata.level()) {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.registry
            .emit(metadata.target(), *metadata.level(), &visitor.finish());
    }
}

/// Collects the `message` field and renders the remaining fields as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }
}

/// Installs a global subscriber that forwards to [`registry::global`].
///
/// Runs at most once per process. When another global subscriber is already
/// set, the existing one stays in place and explicit [`crate::Logger`] calls
/// still reach the registry.
pub fn install_global() {
    INSTALL.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(RegistryLayer::new(Arc::clone(registry::global())))
            .try_init();
    });
}
