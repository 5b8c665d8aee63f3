// Singleton pattern, two ways: a lazily initialised `OnceLock` and a
// `lazy_static!` instance that also carries shared mutable state.

use std::sync::{Mutex, OnceLock};

use lazy_static::lazy_static;
use tracing::debug;

// ============================================================================
// Singleton with OnceLock
// ============================================================================

#[derive(Debug)]
pub struct Singleton {
    name: &'static str,
}

impl Singleton {
    /// The one instance; built on first call.
    pub fn instance() -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            debug!("initialising Singleton");
            Singleton { name: "Singleton" }
        })
    }

    pub fn name(&self) -> &str {
        self.name
    }
}

// ============================================================================
// Singleton with lazy_static
// ============================================================================

/// Every handle sees the same `bag`; the last write wins.
#[derive(Debug)]
pub struct Singleton2 {
    name: &'static str,
    bag: Mutex<String>,
}

lazy_static! {
    static ref SINGLETON2: Singleton2 = {
        debug!("initialising Singleton2");
        Singleton2 {
            name: "Singleton2",
            bag: Mutex::new(String::new()),
        }
    };
}

impl Singleton2 {
    pub fn instance() -> &'static Singleton2 {
        &SINGLETON2
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn set_bag(&self, value: impl Into<String>) {
        // A poisoned lock still holds a usable string.
        let mut bag = self.bag.lock().unwrap_or_else(|e| e.into_inner());
        *bag = value.into();
    }

    pub fn bag(&self) -> String {
        self.bag.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_same_instance() {
        let single = Singleton::instance();
        let single2 = Singleton::instance();
        assert!(std::ptr::eq(single, single2));
        assert_eq!(single.name(), "Singleton");
    }

    #[test]
    fn test_singleton2_same_instance() {
        let single3 = Singleton2::instance();
        let single4 = Singleton2::instance();
        assert!(std::ptr::eq(single3, single4));
        assert_eq!(single4.name(), "Singleton2");
    }

    #[test]
    fn test_singleton2_bag_is_shared() {
        let single3 = Singleton2::instance();
        let single4 = Singleton2::instance();

        single3.set_bag("bag");
        single4.set_bag("bag2");

        assert_eq!(single3.bag(), "bag2");
    }
}
