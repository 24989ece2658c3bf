use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle() -> AppResult<()> {
    Config::init_all()?;
    success(format!(
        "Configuration initialized at {}",
        Config::config_file().display()
    ));
    info("Edit the credentials file to add users (username: password).");
    Ok(())
}
