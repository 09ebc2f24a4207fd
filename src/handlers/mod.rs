use crate::validator::{ValidationError, ValidationResult, Validator};
use serde_json::Value;
use std::sync::Arc;

/// Events raised by a form session.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    Changed(&'a Value),
    Submitted(&'a Value),
    Errors(&'a [ValidationError]),
}

impl Event<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            Event::Changed(_) => "changed",
            Event::Submitted(_) => "submitted",
            Event::Errors(_) => "errors",
        }
    }
}

/// Trait for callbacks attached to a form session.
pub trait Handler: Send + Sync {
    fn name(&self) -> &'static str;
    fn handle(&self, event: &Event<'_>);
}

/// Thread-safe handler list, dispatched in registration order.
#[derive(Clone, Default)]
pub struct Handlers {
    inner: Arc<Vec<Arc<dyn Handler>>>,
}

impl Handlers {
    pub fn new() -> Self { Self::default() }

    pub fn with_logging() -> Self {
        let mut handlers = Self::new();
        handlers.register(builtins::LogHandler);
        handlers
    }

    pub fn register<H: Handler + 'static>(&mut self, h: H) {
        Arc::make_mut(&mut self.inner).push(Arc::new(h));
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.inner.iter().map(|h| h.name()).collect()
    }

    pub fn dispatch(&self, event: &Event<'_>) {
        for h in self.inner.iter() {
            h.handle(event);
        }
    }
}

/// Holds the value being edited and reports edits and submissions to its handlers.
pub struct FormSession {
    value: Value,
    validator: Validator,
    handlers: Handlers,
}

impl FormSession {
    pub fn new(validator: Validator, handlers: Handlers) -> Self {
        Self { value: Value::Null, validator, handlers }
    }

    pub fn value(&self) -> &Value { &self.value }

    pub fn change(&mut self, value: Value) {
        self.value = value;
        self.handlers.dispatch(&Event::Changed(&self.value));
    }

    /// Validate the current value; `Submitted` fires only when it is valid.
    pub fn submit(&self) -> ValidationResult {
        let result = self.validator.validate(&self.value);
        if result.valid {
            self.handlers.dispatch(&Event::Submitted(&self.value));
        } else {
            self.handlers.dispatch(&Event::Errors(result.errors()));
        }
        result
    }
}

pub mod builtins {
    use super::*;
    use tracing::{info, warn};

    /// Logs every event under its label.
    pub struct LogHandler;
    impl Handler for LogHandler {
        fn name(&self) -> &'static str { "log" }
        fn handle(&self, event: &Event<'_>) {
            match event {
                Event::Changed(v) | Event::Submitted(v) => info!(event = event.label(), value = %v),
                Event::Errors(errs) => {
                    for e in errs.iter() {
                        warn!(event = event.label(), path = %e.path, "{}", e.message);
                    }
                }
            }
        }
    }
}
