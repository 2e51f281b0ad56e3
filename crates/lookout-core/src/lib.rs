//! lookout-core - Core library for Lookout
//!
//! This crate contains the shared models, configuration resolution, and HTTP
//! clients used by the Lookout UI shells.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{ListEndpoint, UserConfigClient, API_KEYS, BRANDS, INTENTS};
pub use error::{ApiError, ApiResult};
