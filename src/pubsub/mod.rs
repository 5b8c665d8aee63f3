//! # Observer pattern: publish and subscribe
//!
//! Any type gains publish/subscribe behaviour by embedding a [`Publisher`]
//! and implementing [`Publish`], or by being wrapped with [`attach`].
//!
//! ```text
//!   subscribe(h, "monthly") ──► { "any": [..], "monthly": [h] }
//!   publish_to(x, "monthly") ─► h(x)           (registration order)
//!   publish(x)               ─► every handler on "any"
//! ```
//!
//! Dispatch is synchronous. With [`Publish::publish`] the first failing
//! handler stops the dispatch and its error is returned;
//! [`Publisher::publish_isolated`] keeps going and reports every failure.
//!
//! Handlers are `Rc`-based, so a publisher stays on the thread that built it.

mod attach;
mod channel;
mod handler;
mod publisher;

pub use attach::{attach, Attached};
pub use channel::Channel;
pub use handler::Handler;
pub use publisher::{DispatchReport, Publish, Publisher};
