//! `stockroom` binary support.
//!
//! The executable itself only wires configuration and logging; the fixed
//! demonstration run lives in [`demo`] so it can be driven from tests.

pub mod demo;
