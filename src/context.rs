use crate::configuration::Configuration;
use crate::storage::WikiMapper;

pub struct Context {
    pub config: Configuration,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let cfg = Configuration {
            db_path: cli.db.clone(),
            format: cli.format,
            log_file: cli.log_file.clone(),
        };
        Self { config: cfg }
    }

    pub fn mapper(&self) -> WikiMapper {
        WikiMapper::new(&self.config.db_path)
    }
}
