//! Hemline Core - Shared types library.
//!
//! This crate provides the common types used by the Hemline API server:
//! newtype IDs, validated email addresses, and decimal prices.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! Database encode/decode support for `SQLite` is available behind the
//! `sqlite` feature.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
