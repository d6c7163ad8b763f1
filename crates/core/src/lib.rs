//! Core types for the rollcall verification bot.
//!
//! This crate defines the domain model for registered users and the
//! storage abstraction that backends implement. It performs no I/O.

pub mod storage;
pub mod user;
