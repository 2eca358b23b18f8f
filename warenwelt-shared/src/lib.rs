//! Shared data models for the Warenwelt back office.
//!
//! Everything here mirrors the JSON schema of the remote Warenwelt API; the
//! front-end treats these records as the API defines them and adds no
//! semantics of its own.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::multiple_crate_versions)]

pub mod models;
