//! Truth assignments

use super::expression::Symbol;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assignment of truth values to symbols, in binding order.
///
/// Models are extended by copying: `extended` leaves the receiver untouched,
/// so sibling branches of a search never observe each other's bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model {
    bindings: IndexMap<Symbol, bool>,
}

impl Model {
    pub fn new() -> Self {
        Model::default()
    }

    /// A copy of this model with one more binding
    pub fn extended(&self, symbol: Symbol, value: bool) -> Model {
        let mut bindings = self.bindings.clone();
        bindings.insert(symbol, value);
        Model { bindings }
    }

    pub fn value(&self, symbol: &str) -> Option<bool> {
        self.bindings.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.bindings.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, bool)> + '_ {
        self.bindings.iter().map(|(s, v)| (s, *v))
    }
}

/// Later bindings for the same symbol replace earlier ones
impl FromIterator<(Symbol, bool)> for Model {
    fn from_iter<I: IntoIterator<Item = (Symbol, bool)>>(iter: I) -> Self {
        Model {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (symbol, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", symbol, value)?;
        }
        write!(f, "}}")
    }
}
