//! # js-patterns
//!
//! Classic object patterns rewritten with traits and explicit instances:
//!
//! - [`pubsub`]: observer / publish-subscribe capability (the core)
//! - [`newspaper`]: the paper-and-reader walkthrough built on [`pubsub`]
//! - [`singleton`]: `OnceLock` and `lazy_static!` singletons
//! - [`factory`]: car factory with named lookup
//! - [`validator`]: strategy pattern as a configurable form validator
//!
//! Run every demonstration with:
//! ```bash
//! cargo run --bin patterns
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod newspaper;
pub mod pubsub;
pub mod singleton;
pub mod validator;

pub use config::DemoConfig;
pub use error::{HandlerError, PatternError, PublishError};
pub use pubsub::{attach, Attached, Channel, DispatchReport, Handler, Publish, Publisher};
