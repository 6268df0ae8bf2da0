//! Tipos compartilhados do TopHit.

pub mod config;
pub mod errors;
pub mod options;
