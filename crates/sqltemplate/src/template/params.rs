//! Placeholder naming and parameter storage.

use crate::value::ParamValue;
use std::collections::{BTreeMap, HashMap};

/// Render a named placeholder: `#{key}`.
pub(crate) fn placeholder(key: &str) -> String {
    format!("#{{{}}}", key)
}

/// Assign `<column>in<i>` keys to already-ordered values.
///
/// Index `i` follows the order of `values`, not the string order of the keys.
pub(crate) fn in_keys<I>(column: &str, values: I) -> Vec<(String, ParamValue)>
where
    I: IntoIterator<Item = ParamValue>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| (format!("{}in{}", column, i), value))
        .collect()
}

/// Render the placeholder list of an `IN (...)` clause.
///
/// Keys are sorted as strings before rendering, so `in10` sorts before `in2`.
pub(crate) fn in_placeholders(entries: &[(String, ParamValue)]) -> String {
    let mut keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
    keys.sort_unstable();
    keys.into_iter()
        .map(placeholder)
        .collect::<Vec<_>>()
        .join(",")
}

/// Named parameter storage.
///
/// Stored unordered; [`Params::sorted`] yields the key-ordered view handed to
/// callers.
#[derive(Clone, Debug, Default)]
pub(crate) struct Params {
    values: HashMap<String, ParamValue>,
}

impl Params {
    /// Bind `value` under `key`, returning the value it replaced.
    pub(crate) fn insert(
        &mut self,
        key: impl Into<String>,
        value: ParamValue,
    ) -> Option<ParamValue> {
        let key = key.into();

        #[cfg(feature = "tracing")]
        if let Some(prev) = self.values.get(&key) {
            tracing::warn!(
                target: "sqltemplate",
                key = %key,
                kind = prev.kind(),
                "placeholder bound twice, earlier value overwritten"
            );
        }

        self.values.insert(key, value)
    }

    /// Number of bound placeholders.
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Extend with `(key, value)` pairs.
    pub(crate) fn extend(&mut self, entries: impl IntoIterator<Item = (String, ParamValue)>) {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    /// Copy of all bindings in ascending key order.
    pub(crate) fn sorted(&self) -> BTreeMap<String, ParamValue> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
