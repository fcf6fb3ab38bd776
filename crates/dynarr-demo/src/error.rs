use core::num::ParseIntError;

use thiserror::Error;

use dynarr_mem::CapacityError;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("invalid value {value:?} for {name}")]
    InvalidSetting {
        name: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("insert index {index} is past the end of an array of {count} elements")]
    IndexOutOfRange {
        index: usize,
        count: usize,
    },
    #[error("step {step:?} produced {found}, expected {expected}")]
    Mismatch {
        step: &'static str,
        expected: String,
        found: String,
    },
    #[error("array operation failed")]
    Capacity(#[from] CapacityError),
}
