//! Component catalog, query resolution and snippet assembly.
//!
//! The catalog is immutable once compiled; [`Resolver`] and
//! [`SnippetAssembler`] borrow it through an `Arc` and hold no other state.

pub mod assembler;
pub mod catalog;
pub mod error;
pub mod resolver;

pub use assembler::SnippetAssembler;
pub use catalog::{CatalogDocument, ComponentCatalog};
pub use error::CatalogError;
pub use resolver::{MatchTier, Resolution, Resolver};
