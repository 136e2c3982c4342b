//! `tt-catalog` — the Resource Loader boundary.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`source`]  | `ResourceSource` trait, `Resources`, `load_resources`    |
//! | [`memory`]  | `MemoryCatalog`, `TenantCatalog`                         |
//! | [`json`]    | `load_catalog_json`, `load_catalog_reader`               |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                       |
//!
//! Every read is scoped to one [`TenantId`](tt_core::TenantId).  A tenant
//! with no records of a kind yields an empty `Vec`, never an error; errors are
//! reserved for a backing store that cannot be read.

pub mod error;
pub mod json;
pub mod memory;
pub mod source;

#[cfg(test)]
mod tests;

pub use error::{CatalogError, CatalogResult};
pub use json::{load_catalog_json, load_catalog_reader};
pub use memory::{MemoryCatalog, TenantCatalog};
pub use source::{ResourceSource, Resources, load_resources};
