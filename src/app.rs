use crate::{cli, context};
use anyhow::Result;

pub struct App {
    pub ctx: context::Context,
    pub cmd: cli::Command,
}

impl App {
    pub fn from_cli() -> Self {
        let cli = crate::cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init(ctx.config.log_file.as_deref());
        log::debug!("📂 Mapping database: {}", ctx.config.db_path.display());
        if let Some(path) = ctx.config.log_file.as_deref() {
            log::debug!("📝 Log file: {}", path.display());
        }

        Self { ctx, cmd: cli.cmd }
    }

    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.cmd.run(&self.ctx, &mut out)
    }
}

pub fn run() -> Result<()> {
    App::from_cli().run()
}
