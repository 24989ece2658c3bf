//! Backup of one user's data files (accumulated table + logbook).

use crate::errors::{AppError, AppResult};
use crate::store::{logbook, table};
use crate::ui::messages::{info, success};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the user's files into `dest_dir`, or pack them into a single
    /// zip when `compress` is set. Refuses to overwrite without `force`.
    pub fn backup(
        data_dir: &Path,
        username: &str,
        dest: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<()> {
        let sources: Vec<PathBuf> = [
            table::table_file(data_dir, username),
            logbook::log_file(data_dir, username),
        ]
        .into_iter()
        .filter(|p| p.exists())
        .collect();

        if sources.is_empty() {
            return Err(AppError::Backup(format!(
                "no data files found for user '{}'",
                username
            )));
        }

        if compress {
            let zip_path = Path::new(dest).with_extension("zip");
            if zip_path.exists() && !force {
                return Err(AppError::Backup(format!(
                    "'{}' already exists (use --force to overwrite)",
                    zip_path.display()
                )));
            }
            compress_files(&sources, &zip_path)?;
            success(format!("Backup created: {}", zip_path.display()));
        } else {
            let dest_dir = Path::new(dest);
            fs::create_dir_all(dest_dir)?;
            for src in &sources {
                let target = dest_dir.join(src.file_name().unwrap_or_default());
                if target.exists() && !force {
                    return Err(AppError::Backup(format!(
                        "'{}' already exists (use --force to overwrite)",
                        target.display()
                    )));
                }
                fs::copy(src, &target)?;
                info(format!("Copied {}", target.display()));
            }
            success(format!("Backup created in {}", dest_dir.display()));
        }

        Ok(())
    }
}

fn compress_files(sources: &[PathBuf], zip_path: &Path) -> AppResult<()> {
    if let Some(parent) = zip_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for src in sources {
        let name = src
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mut f = fs::File::open(src)?;
        zip.start_file(name, options.clone())
            .map_err(std::io::Error::other)?;
        std::io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(std::io::Error::other)?;
    Ok(())
}
