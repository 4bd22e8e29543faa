pub mod sqlite;
pub mod traits;

pub use sqlite::WikiMapper;
pub use traits::{MappingReader, PageMapping, TitleMapping};
