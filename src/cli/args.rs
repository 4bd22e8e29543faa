use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::cli::command::Command;
use crate::configuration::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Look up Wikidata ids for Wikipedia pages in a precomputed SQLite index",
    long_about = "Read-only queries against a SQLite index mapping Wikipedia page titles to Wikidata ids. The index is built by a separate offline process."
)]
pub struct Cli {
    #[arg(
        short = 'd',
        long = "db",
        env = "WIKIMAPPER_DB",
        value_name = "PATH",
        help = "Path to the mapping SQLite database"
    )]
    pub db: PathBuf,

    #[arg(
        short = 'f',
        long,
        env = "WIKIMAPPER_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for query results"
    )]
    pub format: OutputFormat,

    #[arg(
        long = "log-file",
        env = "WIKIMAPPER_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title_lookup() {
        let cli = Cli::try_parse_from([
            "wikimapper",
            "--db",
            "index_enwiki.db",
            "title-to-id",
            "Manatee",
        ])
        .unwrap();
        assert_eq!(cli.db, PathBuf::from("index_enwiki.db"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(
            cli.cmd,
            Command::TitleToId {
                title: "Manatee".into()
            }
        );
    }

    #[test]
    fn parses_dump_with_page_id_as_json() {
        let cli = Cli::try_parse_from([
            "wikimapper",
            "--db",
            "index.db",
            "--format",
            "json",
            "dump",
            "--with-page-id",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.cmd, Command::Dump { with_page_id: true });
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(Cli::try_parse_from(["wikimapper", "--db", "index.db"]).is_err());
    }
}
