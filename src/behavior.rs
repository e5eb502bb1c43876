//! Interaction decisions, kept free of DOM types so they compile and
//! test on the native target. The wasm layer in `crate::frontend` only
//! feeds these functions measurements and applies their answers.

pub mod chrome;
pub mod counter;
pub mod filter;
pub mod preview;
pub mod reveal;
