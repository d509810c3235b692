//! The symbol table shipped alongside a traced graph.
//!
//! Bindings map a local name to the canonical encoding of the IR it stands
//! for. The table only grows: there is no way to remove or rebind a name,
//! so a name handed out once keeps meaning the same sub-graph.

use std::fmt;

use weft_bimap::BiMap;
use weft_ir::{Result, Value};

use crate::tracer::LOCAL_NAME_PREFIX;

#[derive(Default)]
pub struct Locals {
    table: BiMap<String, Vec<u8>>,
}

impl Locals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Encoded IR bound to `name`.
    pub fn encoded(&self, name: &str) -> Option<Vec<u8>> {
        self.table.find_by_key(&name.to_string())
    }

    /// Name bound to `encoded`, if any.
    pub fn name_of(&self, encoded: &[u8]) -> Option<String> {
        self.table.find_by_value(&encoded.to_vec())
    }

    /// Decoded IR bound to `name`.
    pub fn resolve(&self, name: &str) -> Result<Option<Value>> {
        self.encoded(name).map(|bytes| Value::decode(&bytes)).transpose()
    }

    /// Bind a parameter (or any other free reference) to `ir`.
    ///
    /// Returns `false` without changing anything if `name` is already bound
    /// or `ir` already has a name.
    pub fn bind(&self, name: impl Into<String>, ir: &Value) -> Result<bool> {
        Ok(self.insert_encoded(name.into(), ir.encode()?))
    }

    pub(crate) fn insert_encoded(&self, name: String, encoded: Vec<u8>) -> bool {
        self.table.insert(name, encoded)
    }

    /// Every binding, generated names first in index order, then any other
    /// names alphabetically.
    pub fn snapshot(&self) -> Vec<(String, Vec<u8>)> {
        let mut bindings = self.table.snapshot();
        bindings.sort_by(|(a, _), (b, _)| order_key(a).cmp(&order_key(b)));
        bindings
    }
}

fn order_key(name: &str) -> (bool, usize, &str) {
    match name
        .strip_prefix(LOCAL_NAME_PREFIX)
        .and_then(|digits| digits.parse::<usize>().ok())
    {
        Some(index) => (false, index, ""),
        None => (true, 0, name),
    }
}

impl fmt::Debug for Locals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.snapshot().into_iter().map(|(name, _)| name))
            .finish()
    }
}
