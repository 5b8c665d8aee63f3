use std::ops::{Deref, DerefMut};

use super::{Publish, Publisher};

/// A host value paired with its own [`Publisher`].
///
/// Derefs to the host, so the host's own methods stay callable alongside
/// the [`Publish`] ones.
#[derive(Debug)]
pub struct Attached<T, P> {
    host: T,
    publisher: Publisher<P>,
}

/// Gives `target` publish/subscribe capability with a fresh subscriber map.
pub fn attach<T, P>(target: T) -> Attached<T, P> {
    Attached {
        host: target,
        publisher: Publisher::new(),
    }
}

impl<T, P> Attached<T, P> {
    pub fn host(&self) -> &T {
        &self.host
    }

    /// Drops the capability and returns the host.
    pub fn into_inner(self) -> T {
        self.host
    }
}

impl<T, P> Publish<P> for Attached<T, P> {
    fn publisher(&self) -> &Publisher<P> {
        &self.publisher
    }

    fn publisher_mut(&mut self) -> &mut Publisher<P> {
        &mut self.publisher
    }
}

impl<T, P> Deref for Attached<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.host
    }
}

impl<T, P> DerefMut for Attached<T, P> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.host
    }
}
