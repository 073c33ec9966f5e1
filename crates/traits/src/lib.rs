//! Core digest trait for the omnihash workspace.
//!
//! This crate provides the single capability interface every pluggable
//! algorithm conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! A conforming implementation supplies its output and block geometry as
//! associated constants, streaming `update`, an idempotent `finalize`, and
//! `reset`; the `Clone` bound supplies live-state copying. The engine crate
//! type-erases implementations behind this trait, so state must be a plain
//! value type: no file handles, no borrowed data, no external resources.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod digest;

pub use digest::Digest;
