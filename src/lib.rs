#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits)]

extern crate alloc;

mod utils;
pub(crate) use utils::helper;

mod error;
pub use error::{Error, Result};

mod arithmetic;
pub use arithmetic::{add, clamp_add};

mod descriptive;
pub use descriptive::{mean, median, weighted_mean};

mod running_stats;
pub use running_stats::RunningStats;
