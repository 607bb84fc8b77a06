//! Core library components.
//!
//! This module contains the reusable logic for parsing secret references,
//! talking to the secret store, and resolving references with caching.

pub mod config;
pub mod constants;
pub mod directive;
pub mod query;
pub mod resolver;
pub mod store;
