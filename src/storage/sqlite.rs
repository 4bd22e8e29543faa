use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::traits::{MappingReader, PageMapping, TitleMapping};
use crate::error::{MapperError, Result};

const BUSY_TIMEOUT: Duration = Duration::from_millis(500);

/// Mapping index stored in a SQLite file built by an offline process.
///
/// Holds only the path: every query opens its own read-only connection,
/// which is closed before the query returns.
#[derive(Clone, Debug)]
pub struct WikiMapper {
    path: PathBuf,
}

fn db_title_to_id(conn: &Connection, page_title: &str) -> rusqlite::Result<Option<String>> {
    let row: Option<Option<String>> = conn
        .query_row(
            "SELECT wikidata_id FROM mapping WHERE wikipedia_title = ?1",
            params![page_title],
            |row| row.get(0),
        )
        .optional()?;
    Ok(row.flatten())
}

fn db_id_to_title(conn: &Connection, wikidata_id: &str) -> rusqlite::Result<Option<String>> {
    // No ORDER BY: the first distinct title in storage order is the main record.
    conn.query_row(
        "SELECT DISTINCT wikipedia_title FROM mapping WHERE wikidata_id = ?1",
        params![wikidata_id],
        |row| row.get(0),
    )
    .optional()
}

fn map_title_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TitleMapping> {
    Ok(TitleMapping {
        title: row.get(0)?,
        wikidata_id: row.get(1)?,
    })
}

fn map_page_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PageMapping> {
    Ok(PageMapping {
        page_id: row.get(0)?,
        title: row.get(1)?,
        wikidata_id: row.get(2)?,
    })
}

fn db_full_mapping(conn: &Connection) -> rusqlite::Result<Vec<TitleMapping>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT wikipedia_title, wikidata_id FROM mapping WHERE wikidata_id IS NOT NULL",
    )?;
    let mapped = stmt
        .query_map([], map_title_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(mapped)
}

fn db_full_mapping_with_page_id(conn: &Connection) -> rusqlite::Result<Vec<PageMapping>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT DISTINCT wikipedia_id, wikipedia_title, wikidata_id
        FROM mapping
        WHERE wikidata_id IS NOT NULL
        "#,
    )?;
    let mapped = stmt
        .query_map([], map_page_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(mapped)
}

impl WikiMapper {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: rusqlite::Error) -> MapperError {
        log::warn!(
            "Mapping database {} is unavailable: {}",
            self.path.display(),
            source
        );
        MapperError::StorageUnavailable {
            path: self.path.clone(),
            source,
        }
    }

    /// Open read-only and check that the file is a database with a `mapping` table.
    fn open(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| self.unavailable(source))?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|source| self.unavailable(source))?;
        // SQLite reads the header lazily; preparing forces it.
        conn.prepare("SELECT 1 FROM mapping LIMIT 0")
            .map_err(|source| self.unavailable(source))?;
        Ok(conn)
    }

    /// Open a connection, run the supplied closure, and drop the connection
    /// on every return path.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.open()?;
        Ok(f(&conn)?)
    }
}

impl MappingReader for WikiMapper {
    fn title_to_id(&self, page_title: &str) -> Result<Option<String>> {
        log::debug!("title_to_id: {}", page_title);
        self.with_conn(|conn| db_title_to_id(conn, page_title))
    }

    fn id_to_title(&self, wikidata_id: &str) -> Result<Option<String>> {
        log::debug!("id_to_title: {}", wikidata_id);
        self.with_conn(|conn| db_id_to_title(conn, wikidata_id))
    }

    fn full_mapping(&self) -> Result<Vec<TitleMapping>> {
        let rows = self.with_conn(db_full_mapping)?;
        log::debug!("full_mapping: {} rows", rows.len());
        Ok(rows)
    }

    fn full_mapping_with_page_id(&self) -> Result<Vec<PageMapping>> {
        let rows = self.with_conn(db_full_mapping_with_page_id)?;
        log::debug!("full_mapping_with_page_id: {} rows", rows.len());
        Ok(rows)
    }
}
