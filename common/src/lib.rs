//! Shared, DOM-free core of the report viewer.
//!
//! The frontend crate supplies browser implementations of the seams defined in
//! [`controller`]; everything here can be exercised natively in tests.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod requests;
