//! Core types for XAML generation from design documents.
//!
//! This crate provides the foundational types used by `xamlify-codegen`:
//! - Design values (colors, text styles)
//! - The layer tree handed over by the host
//! - Extension options
//! - The resource lookup capability used for deduplication
//! - Error types

pub mod errors;
pub mod layer;
pub mod lookup;
pub mod options;
pub mod types;

pub use errors::*;
pub use layer::*;
pub use lookup::*;
pub use options::*;
pub use types::*;
