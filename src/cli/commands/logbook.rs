use crate::auth::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::logbook;
use crate::ui::messages::{header, success};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    let Commands::Log { add } = cmd else {
        return Ok(());
    };

    let data_dir = Path::new(&cfg.data_dir);

    if let Some(text) = add {
        logbook::append_log(data_dir, &session.username, text)?;
        success("Anotação salva com sucesso!");
    }

    // Always re-read from disk so a fresh note shows up right away.
    header("Diário de Bordo");
    let entries = logbook::load_log(data_dir, &session.username)?;
    if entries.is_empty() {
        println!("Nenhuma anotação encontrada.");
    } else {
        for entry in entries {
            for line in textwrap::wrap(&entry, 100) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
