//! Core library components.
//!
//! This module contains the reusable logic for reading release signing
//! configuration and deciding which identity signs a build.

pub mod constants;
pub mod keystore;
pub mod profile;
pub mod properties;
pub mod resolver;
pub mod settings;
pub mod source;
