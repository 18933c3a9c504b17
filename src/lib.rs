//! Filterer - RGBA image filters from the command line
//!
//! PNG front end for the `rgba-filter` pipeline.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
