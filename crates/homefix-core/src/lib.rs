//! HomeFix Core - Domain models, configuration and collaborator ports
//!
//! This crate contains the domain types shared by the classification and
//! matching pipeline, plus the port traits its external collaborators implement.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod text;

pub use error::{HomefixError, LeadValidationError, Result};
