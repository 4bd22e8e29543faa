#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::path::PathBuf;
use tempfile::TempDir;
use wikimapper::WikiMapper;

pub type Row<'a> = (Option<i64>, &'a str, Option<&'a str>);

pub const SAMPLE_ROWS: &[Row<'static>] = &[
    (Some(1), "Manatee", Some("Q82893")),
    (Some(2), "Fermat's_Last_Theorem", Some("Q35157")),
    (Some(3), "Foo", None),
];

pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub fn new(rows: &[Row<'_>]) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("index_enwiki-latest.db");

        let conn = Connection::open(&path).expect("open fixture db");
        conn.execute_batch(
            r#"
            CREATE TABLE mapping (
                wikipedia_id INTEGER,
                wikipedia_title TEXT NOT NULL,
                wikidata_id TEXT
            );
            CREATE INDEX idx_wikipedia_title ON mapping(wikipedia_title);
            CREATE INDEX idx_wikidata_id ON mapping(wikidata_id);
            "#,
        )
        .expect("create mapping table");
        for (page_id, title, wikidata_id) in rows {
            conn.execute(
                "INSERT INTO mapping (wikipedia_id, wikipedia_title, wikidata_id) VALUES (?1, ?2, ?3)",
                params![page_id, title, wikidata_id],
            )
            .expect("insert mapping row");
        }

        Self { _dir: dir, path }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_ROWS)
    }

    pub fn mapper(&self) -> WikiMapper {
        WikiMapper::new(&self.path)
    }
}
