//! In-process event bus.
//!
//! Delivers each published envelope synchronously to the handlers
//! subscribed to its event type. A recording bus additionally keeps every
//! envelope for test assertions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{EventHandler, EventPublisher, EventSubscriber};

/// In-process event bus.
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::recording());
/// bus.publish(envelope).await?;
/// assert!(bus.has_event("pauta.created.v1"));
/// ```
pub struct InMemoryEventBus {
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
    published: Option<RwLock<Vec<EventEnvelope>>>,
}

impl InMemoryEventBus {
    /// Creates a bus that only dispatches.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            published: None,
        }
    }

    /// Creates a bus that also records every published envelope.
    pub fn recording() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            published: Some(RwLock::new(Vec::new())),
        }
    }

    /// Returns all recorded events; empty for a non-recording bus.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .as_ref()
            .map(|p| p.read().unwrap_or_else(PoisonError::into_inner).clone())
            .unwrap_or_default()
    }

    /// Returns recorded events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns count of recorded events.
    pub fn event_count(&self) -> usize {
        self.published
            .as_ref()
            .map(|p| p.read().unwrap_or_else(PoisonError::into_inner).len())
            .unwrap_or(0)
    }

    /// Checks if a specific event type was recorded.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.published_events()
            .iter()
            .any(|e| e.event_type == event_type)
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if let Some(published) = &self.published {
            published
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
        }

        // Clone handlers to release lock before await points
        let type_handlers: Vec<Arc<dyn EventHandler>> = {
            let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
            handlers
                .get(&event.event_type)
                .cloned()
                .unwrap_or_default()
        };

        let mut errors = Vec::new();
        for handler in type_handlers {
            if let Err(e) = handler.handle(event.clone()).await {
                errors.push(format!("{}: {}", handler.name(), e));
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Handler errors: {}", errors.join(", ")),
            ));
        }

        Ok(())
    }
}

impl EventSubscriber for InMemoryEventBus {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event_type.to_string())
            .or_default()
            .push(handler);
    }

    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>) {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        for event_type in event_types {
            handlers
                .entry(event_type.to_string())
                .or_default()
                .push(Arc::clone(&handler));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, aggregate_id, "Pauta", json!({}))
    }

    struct CountingHandler(Arc<AtomicUsize>);

    #[async_trait]
    impl EventHandler for CountingHandler {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        fn name(&self) -> &'static str {
            "CountingHandler"
        }
    }

    #[tokio::test]
    async fn recording_bus_stores_event() {
        let bus = InMemoryEventBus::recording();
        bus.publish(test_envelope("pauta.created.v1", "p-1")).await.unwrap();

        assert_eq!(bus.event_count(), 1);
        assert!(bus.has_event("pauta.created.v1"));
    }

    #[tokio::test]
    async fn plain_bus_records_nothing() {
        let bus = InMemoryEventBus::new();
        bus.publish(test_envelope("pauta.created.v1", "p-1")).await.unwrap();

        assert_eq!(bus.event_count(), 0);
        assert!(bus.published_events().is_empty());
    }

    #[tokio::test]
    async fn events_of_type_filters_correctly() {
        let bus = InMemoryEventBus::recording();

        bus.publish(test_envelope("type.a", "1")).await.unwrap();
        bus.publish(test_envelope("type.b", "2")).await.unwrap();
        bus.publish(test_envelope("type.a", "3")).await.unwrap();

        assert_eq!(bus.events_of_type("type.a").len(), 2);
    }

    #[tokio::test]
    async fn subscribe_all_registers_for_multiple_types() {
        let bus = InMemoryEventBus::new();
        let received = Arc::new(AtomicUsize::new(0));

        bus.subscribe_all(
            &["type.a", "type.b"],
            Arc::new(CountingHandler(received.clone())),
        );

        bus.publish(test_envelope("type.a", "1")).await.unwrap();
        bus.publish(test_envelope("type.b", "2")).await.unwrap();
        bus.publish(test_envelope("type.c", "3")).await.unwrap(); // Not subscribed

        assert_eq!(received.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn every_subscriber_of_a_type_receives_each_event() {
        let bus = InMemoryEventBus::new();
        let received = Arc::new(AtomicUsize::new(0));
        bus.subscribe("type.a", Arc::new(CountingHandler(received.clone())));
        bus.subscribe("type.a", Arc::new(CountingHandler(received.clone())));

        bus.publish(test_envelope("type.a", "1")).await.unwrap();
        bus.publish(test_envelope("type.a", "2")).await.unwrap();

        assert_eq!(received.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn handler_error_is_propagated() {
        let bus = InMemoryEventBus::new();

        struct FailingHandler;

        #[async_trait]
        impl EventHandler for FailingHandler {
            async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
                Err(DomainError::new(ErrorCode::InternalError, "Handler failed"))
            }
            fn name(&self) -> &'static str {
                "FailingHandler"
            }
        }

        bus.subscribe("test.event", Arc::new(FailingHandler));
        let result = bus.publish(test_envelope("test.event", "1")).await;

        assert!(result.unwrap_err().message.contains("FailingHandler"));
    }
}
