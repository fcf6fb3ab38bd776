use core::{
    num::ParseIntError,
    str::FromStr,
};

use crate::DemoError;

pub const COUNT_VAR: &str = "DYNARR_DEMO_COUNT";
pub const VALUE_VAR: &str = "DYNARR_DEMO_VALUE";
pub const INDEX_VAR: &str = "DYNARR_DEMO_INDEX";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DemoSettings {
    /// Number of integers inserted before doubling.
    pub count: usize,
    pub inserted_value: i64,
    pub insert_index: usize,
}

impl Default for DemoSettings {

    fn default() -> Self {
        Self {
            count: 10,
            inserted_value: 999,
            insert_index: 3,
        }
    }
}

impl DemoSettings {

    pub fn new(count: usize, inserted_value: i64, insert_index: usize) -> Self {
        Self {
            count,
            inserted_value,
            insert_index,
        }
    }

    /// Defaults overridden by `DYNARR_DEMO_COUNT`, `DYNARR_DEMO_VALUE` and `DYNARR_DEMO_INDEX`.
    pub fn from_env() -> Result<Self, DemoError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`DemoSettings::from_env`] with variables read through `lookup`.
    /// Unset and blank variables keep their default.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Result<Self, DemoError> {
        let default = Self::default();
        Ok(Self {
            count: parse_var(&mut lookup, COUNT_VAR, default.count)?,
            inserted_value: parse_var(&mut lookup, VALUE_VAR, default.inserted_value)?,
            insert_index: parse_var(&mut lookup, INDEX_VAR, default.insert_index)?,
        })
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if self.insert_index > self.count {
            return Err(DemoError::IndexOutOfRange {
                index: self.insert_index,
                count: self.count,
            })
        }
        Ok(())
    }
}

fn parse_var<V>(
    lookup: &mut impl FnMut(&str) -> Option<String>,
    name: &'static str,
    default: V,
) -> Result<V, DemoError>
    where
        V: FromStr<Err = ParseIntError>,
{
    let Some(value) = lookup(name) else {
        return Ok(default)
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(default)
    }
    trimmed.parse().map_err(|source| DemoError::InvalidSetting {
        name,
        value,
        source,
    })
}
