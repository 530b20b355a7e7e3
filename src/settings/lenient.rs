//! Per-field decoders that never fail.
//!
//! A field whose JSON value has the wrong shape falls back to the same base
//! value a missing field gets, so one bad entry cannot reject the document.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use super::defaults;

fn decode_or<'de, D, T>(deserializer: D, fallback: impl FnOnce() -> T) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_else(|_| fallback()))
}

/// Decodes any field whose base value is its zero value.
pub(super) fn zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    decode_or(deserializer, T::default)
}

pub(super) fn gui_page_size<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    decode_or(deserializer, defaults::gui_page_size)
}

pub(super) fn switch_safe_file_names<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    decode_or(deserializer, defaults::switch_safe_file_names)
}

pub(super) fn ignore_dlc_title_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    decode_or(deserializer, defaults::ignore_dlc_title_ids)
}

pub(super) fn organize_options<'de, D>(
    deserializer: D,
) -> Result<super::OrganizeOptions, D::Error>
where
    D: Deserializer<'de>,
{
    decode_or(deserializer, super::OrganizeOptions::base)
}
