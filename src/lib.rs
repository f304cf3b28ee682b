#![cfg_attr(feature = "nightly", feature(test))]
#[cfg(feature = "nightly")]
extern crate test;

pub mod borrow;
pub mod error;
pub mod ops;
pub mod option;

pub use error::EmptyValueError;
pub use option::{Optional, none, some};
