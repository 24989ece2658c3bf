use crate::auth::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    else {
        return Ok(());
    };

    BackupLogic::backup(
        Path::new(&cfg.data_dir),
        &session.username,
        file,
        *compress,
        *force,
    )
}
