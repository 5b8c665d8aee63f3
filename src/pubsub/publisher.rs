use rustc_hash::FxHashMap as HashMap;
use tracing::{debug, trace, warn};

use crate::error::PublishError;

use super::{Channel, Handler};

// ============================================================================
// Publish capability
// ============================================================================

/// The publish/subscribe capability.
///
/// Implementors only expose the [`Publisher`] they embed; subscribing,
/// unsubscribing and publishing are delegated to it.
///
/// ```
/// use js_patterns::pubsub::{Handler, Publish, Publisher};
///
/// struct Station {
///     events: Publisher<f32>,
/// }
///
/// impl Publish<f32> for Station {
///     fn publisher(&self) -> &Publisher<f32> {
///         &self.events
///     }
///     fn publisher_mut(&mut self) -> &mut Publisher<f32> {
///         &mut self.events
///     }
/// }
///
/// let mut station = Station { events: Publisher::new() };
/// station.subscribe(Handler::new(|t: &f32| println!("{t}")));
/// station.publish(&21.5).unwrap();
/// ```
pub trait Publish<P> {
    fn publisher(&self) -> &Publisher<P>;

    fn publisher_mut(&mut self) -> &mut Publisher<P>;

    /// Subscribes `handler` to the `"any"` channel.
    fn subscribe(&mut self, handler: Handler<P>) {
        self.publisher_mut().add(handler, Channel::any());
    }

    /// Subscribes `handler` to `channel`, creating the channel if needed.
    fn subscribe_to(&mut self, handler: Handler<P>, channel: impl Into<Channel>) {
        self.publisher_mut().add(handler, channel.into());
    }

    fn unsubscribe(&mut self, handler: &Handler<P>) {
        self.publisher_mut().remove(handler, Channel::ANY);
    }

    fn unsubscribe_from(&mut self, handler: &Handler<P>, channel: impl AsRef<str>) {
        self.publisher_mut().remove(handler, channel.as_ref());
    }

    /// Publishes `payload` on the `"any"` channel.
    fn publish(&self, payload: &P) -> Result<(), PublishError> {
        self.publisher().dispatch(payload, Channel::ANY)
    }

    fn publish_to(&self, payload: &P, channel: impl AsRef<str>) -> Result<(), PublishError> {
        self.publisher().dispatch(payload, channel.as_ref())
    }
}

// ============================================================================
// Publisher
// ============================================================================

/// Per-host subscriber state: channel name to handlers in registration order.
pub struct Publisher<P> {
    subscribers: HashMap<Channel, Vec<Handler<P>>>,
}

impl<P> Publisher<P> {
    /// Creates a publisher whose only channel is `"any"`, with no handlers.
    pub fn new() -> Self {
        let mut subscribers = HashMap::default();
        subscribers.insert(Channel::any(), Vec::new());
        Self { subscribers }
    }

    fn add(&mut self, handler: Handler<P>, channel: Channel) {
        debug!(channel = %channel, "subscribe");
        self.subscribers.entry(channel).or_default().push(handler);
    }

    fn remove(&mut self, handler: &Handler<P>, channel: &str) {
        let Some(handlers) = self.subscribers.get_mut(channel) else {
            return;
        };
        if let Some(index) = handlers.iter().position(|h| h == handler) {
            handlers.remove(index);
            debug!(channel, index, "unsubscribe");
        }
    }

    /// Fail-fast dispatch: the first handler error stops the remaining calls.
    fn dispatch(&self, payload: &P, channel: &str) -> Result<(), PublishError> {
        let Some(handlers) = self.subscribers.get(channel) else {
            return Ok(());
        };
        trace!(channel, handlers = handlers.len(), "publish");

        for (position, handler) in handlers.iter().enumerate() {
            handler.call(payload).map_err(|source| {
                warn!(channel, position, error = %source, "handler failed");
                PublishError {
                    channel: Channel::from(channel),
                    position,
                    source,
                }
            })?;
        }
        Ok(())
    }

    /// Invokes every handler on `channel` even if some of them fail.
    pub fn publish_isolated(&self, payload: &P, channel: impl AsRef<str>) -> DispatchReport {
        let channel = channel.as_ref();
        let mut report = DispatchReport::default();
        let Some(handlers) = self.subscribers.get(channel) else {
            return report;
        };

        for (position, handler) in handlers.iter().enumerate() {
            match handler.call(payload) {
                Ok(()) => report.delivered += 1,
                Err(source) => {
                    warn!(channel, position, error = %source, "handler failed");
                    report.failures.push(PublishError {
                        channel: Channel::from(channel),
                        position,
                        source,
                    });
                }
            }
        }
        report
    }

    /// Number of handlers on `channel`, duplicates included.
    pub fn subscriber_count(&self, channel: impl AsRef<str>) -> usize {
        self.subscribers
            .get(channel.as_ref())
            .map_or(0, Vec::len)
    }

    pub fn has_channel(&self, channel: impl AsRef<str>) -> bool {
        self.subscribers.contains_key(channel.as_ref())
    }

    /// Known channels, sorted by name.
    pub fn channels(&self) -> Vec<&Channel> {
        let mut channels: Vec<&Channel> = self.subscribers.keys().collect();
        channels.sort();
        channels
    }

    /// Drops every handler on `channel`. The channel itself stays known.
    pub fn clear(&mut self, channel: impl AsRef<str>) {
        if let Some(handlers) = self.subscribers.get_mut(channel.as_ref()) {
            handlers.clear();
        }
    }
}

impl<P> Default for Publisher<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> std::fmt::Debug for Publisher<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for channel in self.channels() {
            map.entry(&channel.as_str(), &self.subscriber_count(channel));
        }
        map.finish()
    }
}

impl<P> Publish<P> for Publisher<P> {
    fn publisher(&self) -> &Publisher<P> {
        self
    }

    fn publisher_mut(&mut self) -> &mut Publisher<P> {
        self
    }
}

/// Outcome of [`Publisher::publish_isolated`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub delivered: usize,
    pub failures: Vec<PublishError>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
