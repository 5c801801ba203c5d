//! Record predicates for collection reads and updates
//!
//! Predicates are equality filters combined with `And`. Equality is strict
//! [`Value`] equality, so `Int(7)` never matches `String("7")`.

use crate::types::{Record, INTERNAL_ID_FIELD};
use crate::value::Value;

/// Filter over the records of one collection
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Matches every record
    All,
    /// Field equals value; a missing field never matches
    Eq(String, Value),
    /// All inner predicates match
    And(Vec<Predicate>),
}

impl Predicate {
    /// Equality on `field`
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Predicate::Eq(field.into(), value.into())
    }

    /// Equality on the internal id
    pub fn internal_id(id: i64) -> Self {
        Predicate::Eq(INTERNAL_ID_FIELD.to_string(), Value::Int(id))
    }

    /// Conjunction of `self` and `other`
    pub fn and(self, other: Predicate) -> Self {
        match self {
            Predicate::All => other,
            Predicate::And(mut inner) => {
                inner.push(other);
                Predicate::And(inner)
            }
            first => Predicate::And(vec![first, other]),
        }
    }

    /// Whether `record` satisfies this predicate
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::All => true,
            Predicate::Eq(field, value) => record.get(field) == Some(value),
            Predicate::And(inner) => inner.iter().all(|p| p.matches(record)),
        }
    }

    /// Internal id this predicate pins, if any
    ///
    /// Stores use this to serve the predicate with a keyed lookup instead
    /// of a scan; the remaining conjuncts still have to be checked.
    pub fn keyed_id(&self) -> Option<i64> {
        match self {
            Predicate::Eq(field, Value::Int(id)) if field == INTERNAL_ID_FIELD => Some(*id),
            Predicate::And(inner) => inner.iter().find_map(Predicate::keyed_id),
            _ => None,
        }
    }
}
