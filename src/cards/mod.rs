//! Card catalog: definitions, lookup and glossary search.
//!
//! ## Key Types
//!
//! - `CardId`: String identifier (`major-0`, `swords-12`)
//! - `Card`: Immutable catalog entry with both interpretations
//! - `Catalog`: Ordered, validated, read-only deck
//! - `CardFilter`: Glossary arcana/suit filter

pub mod definition;
pub mod filter;
pub mod registry;

pub use definition::{Arcana, Card, CardId, Suit};
pub use filter::CardFilter;
pub use registry::{Catalog, CATALOG_VERSION};
