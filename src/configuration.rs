use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bare values, dumps as tab-separated rows.
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct Configuration {
    pub db_path: PathBuf,
    pub format: OutputFormat,
    pub log_file: Option<PathBuf>,
}
