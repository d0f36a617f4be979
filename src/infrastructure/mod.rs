//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`content`] - Content store clients (HTTP)
//! - [`persistence`] - PostgreSQL hotel index

pub mod content;
pub mod persistence;
