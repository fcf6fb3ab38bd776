//! Walks a [`DynamicArray`](dynarr_mem::DynamicArray) through every operation it offers,
//! logging each step and checking what it produces.

mod error;
mod settings;
mod scenario;
mod error_chain;

pub use error::DemoError;
pub use settings::*;
pub use scenario::{Sample, DemoReport, run};
pub use error_chain::{install_log_formats, fn_expand_error};
