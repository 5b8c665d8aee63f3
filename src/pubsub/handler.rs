use std::fmt;
use std::rc::Rc;

use crate::error::HandlerError;

type Callback<P> = dyn Fn(&P) -> Result<(), HandlerError>;

/// A subscriber callback.
///
/// Handlers compare by identity: a clone of a handler is equal to it, while
/// two handlers built from identical closures are not. Subscribing the same
/// handler twice registers it twice.
pub struct Handler<P> {
    callback: Rc<Callback<P>>,
}

impl<P> Handler<P> {
    /// Wraps a callback that cannot fail.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&P) + 'static,
    {
        Self::fallible(move |payload: &P| {
            f(payload);
            Ok(())
        })
    }

    /// Wraps a callback whose error aborts the dispatch that invoked it.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&P) -> Result<(), HandlerError> + 'static,
    {
        Self {
            callback: Rc::new(f),
        }
    }

    pub fn call(&self, payload: &P) -> Result<(), HandlerError> {
        (self.callback)(payload)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<P> Clone for Handler<P> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<P> PartialEq for Handler<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<P> Eq for Handler<P> {}

impl<P> fmt::Debug for Handler<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("callback", &Rc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_clone_is_same_handler() {
        let handler: Handler<u32> = Handler::new(|_| {});
        let clone = handler.clone();
        assert_eq!(handler, clone);
    }

    #[test]
    fn test_identical_closures_are_distinct() {
        let a: Handler<u32> = Handler::new(|_| {});
        let b: Handler<u32> = Handler::new(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn test_call_passes_payload() {
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let handler = Handler::new(move |n: &u32| sink.set(*n));

        handler.call(&7).unwrap();
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_fallible_returns_error() {
        let handler: Handler<&str> = Handler::fallible(|_| Err("nope".into()));
        assert_eq!(handler.call(&"x"), Err(HandlerError::new("nope")));
    }
}
