use std::borrow::Borrow;
use std::fmt;

/// Name of a subscription group.
///
/// Every publisher starts with the `"any"` channel, which is also what
/// [`Channel::default`] returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Channel(String);

impl Channel {
    pub const ANY: &'static str = "any";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn any() -> Self {
        Self::new(Self::ANY)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_any(&self) -> bool {
        self.0 == Self::ANY
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Channel {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Channel {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&Channel> for Channel {
    fn from(channel: &Channel) -> Self {
        channel.clone()
    }
}

// Lets the subscriber map be queried with a plain `&str`.
impl Borrow<str> for Channel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Channel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
