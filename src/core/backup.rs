use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::storage::DataPaths;
use crate::storage::audit::ttlog;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Write the hours file and the activity list into a zip archive.
    /// Entries are deflated with `compress`, stored as-is otherwise.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<()> {
        let paths = DataPaths::resolve(cfg, None);
        let dest = Path::new(dest_file);

        // 1️⃣ Check there is something to save
        if !paths.data.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Data file not found: {}", paths.data.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(dest, force)?;

        // 3️⃣ Write archive
        let method = if compress {
            zip::CompressionMethod::Deflated
        } else {
            zip::CompressionMethod::Stored
        };
        let options = SimpleFileOptions::default().compression_method(method);

        let file = fs::File::create(dest)?;
        let mut zip = ZipWriter::new(file);

        for src in [&paths.data, &paths.activities] {
            if !src.exists() {
                continue;
            }
            let name = src
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .ok_or_else(|| AppError::Export(format!("bad file name: {}", src.display())))?;

            zip.start_file(name, options)
                .map_err(std::io::Error::other)?;
            let mut f = fs::File::open(src)?;
            std::io::copy(&mut f, &mut zip)?;
        }

        zip.finish().map_err(std::io::Error::other)?;
        success(format!("Backup created: {}", dest.display()));

        // 4️⃣ Internal log (non blocking)
        if let Err(e) = ttlog(
            &paths.log,
            "backup",
            &dest.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(())
    }
}
