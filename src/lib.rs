//! Read-only lookups between Wikipedia page titles and Wikidata ids.
//!
//! The index is a SQLite file with a single `mapping` table built by a
//! separate offline process; this crate never writes to it.
//!
//! ```no_run
//! use wikimapper::{MappingReader, WikiMapper};
//!
//! let mapper = WikiMapper::new("index_enwiki-latest.db");
//! let id = mapper.title_to_id("Fermat's_Last_Theorem")?;
//! assert_eq!(id.as_deref(), Some("Q35157"));
//! # Ok::<(), wikimapper::MapperError>(())
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod context;
pub mod error;
pub mod storage;
pub mod tracing;

pub use error::MapperError;
pub use storage::{MappingReader, PageMapping, TitleMapping, WikiMapper};
