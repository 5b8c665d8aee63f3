// Factory pattern: build a car from its kind name, sharing `drive` through
// the trait's provided method.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::PatternError;

pub trait Car {
    fn doors(&self) -> u32;

    fn drive(&self) -> String {
        format!("Vroom,I have {} doors", self.doors())
    }
}

pub struct Compact;
impl Car for Compact {
    fn doors(&self) -> u32 {
        4
    }
}

pub struct Convertible;
impl Car for Convertible {
    fn doors(&self) -> u32 {
        2
    }
}

pub struct Suv;
impl Car for Suv {
    fn doors(&self) -> u32 {
        24
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarKind {
    Compact,
    Convertible,
    Suv,
}

impl CarKind {
    pub const ALL: [CarKind; 3] = [CarKind::Compact, CarKind::Convertible, CarKind::Suv];

    pub fn name(self) -> &'static str {
        match self {
            CarKind::Compact => "Compact",
            CarKind::Convertible => "Convertible",
            CarKind::Suv => "SUV",
        }
    }
}

impl fmt::Display for CarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CarKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CarKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PatternError::unknown_car(s))
    }
}

pub struct CarMaker;

impl CarMaker {
    /// Looks `kind` up by name, e.g. `"SUV"`.
    pub fn factory(kind: &str) -> Result<Box<dyn Car>, PatternError> {
        let kind: CarKind = kind.parse()?;
        Ok(Self::build(kind))
    }

    pub fn build(kind: CarKind) -> Box<dyn Car> {
        debug!(%kind, "building car");
        match kind {
            CarKind::Compact => Box::new(Compact),
            CarKind::Convertible => Box::new(Convertible),
            CarKind::Suv => Box::new(Suv),
        }
    }
}
