//! Search orchestration for The Find 7.
//!
//! This crate owns the UI-facing search state machine:
//!
//! - **Debouncing**: a cancellable deadline timer, re-armed per keystroke
//! - **Orchestration**: query/filter/pagination state, URL hydration and
//!   one-way URL writes
//! - **Suggestions**: the short-debounce type-ahead list
//!
//! Everything is synchronous and single-owner; the only asynchronous
//! primitive is the debounce deadline, driven by explicit polling.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod debounce;
mod state;
mod suggest;

pub use debounce::Debouncer;
pub use state::{Facet, SearchSession};
pub use suggest::Suggester;
