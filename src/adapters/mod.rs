//! Infrastructure adapters. Implement ports.
//!
//! Terminal prompts and report rendering. Map errors to DomainError.

pub mod ui;
