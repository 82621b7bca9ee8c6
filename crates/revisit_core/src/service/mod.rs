//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and selector calls into use-case level APIs.
//! - Keep CLI glue decoupled from storage details.

pub mod note_service;
