use std::io::Write;

use anyhow::{Context as AnyhowContext, Result};

use crate::cli::Command;
use crate::configuration::OutputFormat;
use crate::context;
use crate::storage::{MappingReader, PageMapping, TitleMapping};

impl Command {
    pub fn run(&self, ctx: &context::Context, out: &mut impl Write) -> Result<()> {
        self.run_with(&ctx.mapper(), ctx.config.format, out)
    }

    pub fn run_with<R: MappingReader>(
        &self,
        reader: &R,
        format: OutputFormat,
        out: &mut impl Write,
    ) -> Result<()> {
        match self {
            Command::TitleToId { title } => {
                let id = reader
                    .title_to_id(title)
                    .with_context(|| format!("looking up title {title:?}"))?;
                write_lookup(out, format, id.as_deref())
            }
            Command::UrlToId { url } => {
                let id = reader
                    .url_to_id(url)
                    .with_context(|| format!("looking up url {url:?}"))?;
                write_lookup(out, format, id.as_deref())
            }
            Command::IdToTitle { wikidata_id } => {
                let title = reader
                    .id_to_title(wikidata_id)
                    .with_context(|| format!("looking up wikidata id {wikidata_id:?}"))?;
                write_lookup(out, format, title.as_deref())
            }
            Command::Dump { with_page_id: false } => {
                let rows = reader.full_mapping().context("dumping full mapping")?;
                log::info!("📦 Dumping {} mappings", rows.len());
                write_titles(out, format, &rows)
            }
            Command::Dump { with_page_id: true } => {
                let rows = reader
                    .full_mapping_with_page_id()
                    .context("dumping full mapping with page ids")?;
                log::info!("📦 Dumping {} mappings with page ids", rows.len());
                write_pages(out, format, &rows)
            }
        }
    }
}

fn write_lookup(out: &mut impl Write, format: OutputFormat, value: Option<&str>) -> Result<()> {
    match (format, value) {
        (OutputFormat::Text, Some(value)) => writeln!(out, "{value}")?,
        (OutputFormat::Text, None) => log::info!("No mapping found"),
        (OutputFormat::Json, value) => {
            serde_json::to_writer(&mut *out, &value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_titles(out: &mut impl Write, format: OutputFormat, rows: &[TitleMapping]) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for row in rows {
                writeln!(out, "{}\t{}", row.title, row.wikidata_id)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_pages(out: &mut impl Write, format: OutputFormat, rows: &[PageMapping]) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for row in rows {
                let page_id = row.page_id.map(|id| id.to_string()).unwrap_or_default();
                writeln!(out, "{}\t{}\t{}", page_id, row.title, row.wikidata_id)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
