use std::collections::HashMap;
use std::collections::hash_map::Keys;
use std::fmt::{self, Debug, Formatter};

use super::{Kind, TypeMismatchError, Value};
use crate::util::fmt::DebugDisplay;

/// A map from [`Value`] keys to [`Value`]s, with a fixed key kind and value kind.
///
/// Iteration order is unspecified.
#[derive(Clone, PartialEq, Eq)]
pub struct DynMap {
    key: Kind,
    value: Kind,
    entries: HashMap<Value, Value>,
}

impl DynMap {
    pub fn new(key: Kind, value: Kind) -> DynMap {
        DynMap {
            key,
            value,
            entries: HashMap::new(),
        }
    }

    /// Creates a map of keys to [`Value::Unit`], the representation used for sets.
    pub fn set_of(key: Kind) -> DynMap {
        DynMap::new(key, Kind::Unit)
    }

    pub const fn key(&self) -> &Kind {
        &self.key
    }

    pub const fn value(&self) -> &Kind {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts the provided `key`-`value` pair, returning the value previously associated with the
    /// key. As with [`HashMap`], an existing key isn't replaced.
    pub fn insert(&mut self, key: Value, value: Value) -> Result<Option<Value>, TypeMismatchError> {
        check(&self.key, &key)?;
        check(&self.value, &value)?;
        Ok(self.entries.insert(key, value))
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> Keys<'_, Value, Value> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter()
    }

    /// Inserts a key that is already known to match the key kind, mapping it to the unit value.
    pub(crate) fn insert_member(&mut self, key: Value) {
        debug_assert!(self.key.accepts(&key.kind()) && self.value.is_unit());
        self.entries.insert(key, Value::Unit);
    }
}

fn check(expected: &Kind, value: &Value) -> Result<(), TypeMismatchError> {
    let found = value.kind();
    if expected.accepts(&found) {
        Ok(())
    } else {
        Err(TypeMismatchError {
            expected: expected.clone(),
            found,
        })
    }
}

impl Debug for DynMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynMap")
            .field("key", &DebugDisplay(&self.key))
            .field("value", &DebugDisplay(&self.value))
            .field("entries", &self.entries)
            .finish()
    }
}

impl From<DynMap> for Value {
    fn from(value: DynMap) -> Self {
        Value::Map(value)
    }
}
