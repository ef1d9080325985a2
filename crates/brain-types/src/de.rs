//! Serde helpers for columns the backend may send as `null`

use serde::{Deserialize, Deserializer};

/// Deserialize `null` (or a missing field, with `#[serde(default)]`) as `T::default()`.
///
/// SQL aggregates such as `SUM(cost)` come back as `null` on empty tables.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
