use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types.
///
/// Every aggregate gets its own newtype over a positive integer so that ids of
/// different aggregates cannot be mixed up even though their ranges overlap.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn new(value: i64) -> Self;

    fn value(&self) -> i64;

    /// Convert the id to a string (select option values, DOM keys)
    fn as_string(&self) -> String {
        self.value().to_string()
    }

    /// Parse an id from a string
    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(Self::new)
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

/// Declare an integer id newtype implementing [`AggregateId`]
#[macro_export]
macro_rules! aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $crate::domain::common::AggregateId for $name {
            fn new(value: i64) -> Self {
                Self(value)
            }

            fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::aggregate_id!(
        /// Id used only by these tests
        SampleId
    );

    #[test]
    fn test_string_round_trip() {
        let id = SampleId::new(42);
        assert_eq!(id.as_string(), "42");
        assert_eq!(SampleId::from_string(" 42 "), Ok(id));
        assert!(SampleId::from_string("forty-two").is_err());
        assert_eq!(id.to_string(), "42");
    }
}
