//! Folionest HTTP server.
//!
//! Library portion of the server binary so integration tests can build
//! the router against a temporary database.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;
