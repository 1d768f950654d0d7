use crate::error::{AppDbError, ParseError};
use crate::mapper::map_entry;
use crate::model::AppDb;
use crate::parser::parse;
use crate::sources::Source;
use crate::text::has_suffix;
use log::{debug, error, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

pub const DESKTOP_SUFFIX: &str = ".desktop";

/// Scans `<base>/applications/` for desktop files.
pub struct DesktopSource {
    base: PathBuf,
    max_keys: usize,
}

impl DesktopSource {
    pub fn new(base: impl Into<PathBuf>, max_keys: usize) -> Self {
        Self {
            base: base.into(),
            max_keys,
        }
    }

    pub fn applications_dir(&self) -> PathBuf {
        self.base.join("applications")
    }

    /// Loads one file into `db`. Only I/O failures are returned as errors;
    /// anything wrong with the content skips the file.
    fn load_file(&self, db: &mut AppDb, path: &Path) -> Result<(), AppDbError> {
        let data = fs::read(path).map_err(|e| {
            error!("Failed to read '{}': {}", path.display(), e);
            AppDbError::io(path, e)
        })?;
        let text = String::from_utf8_lossy(&data);

        let kv = match parse(&text, self.max_keys) {
            Ok(kv) => kv,
            Err(e @ ParseError::TooManyKeys { .. }) => {
                error!("Skipping '{}': {}", path.display(), e);
                return Ok(());
            }
            Err(e) => {
                debug!("Skipping '{}': {}", path.display(), e);
                return Ok(());
            }
        };

        let Some(mapped) = map_entry(&kv) else {
            debug!("Skipping '{}': not an application", path.display());
            return Ok(());
        };
        for warning in &mapped.warnings {
            warn!("{}", warning);
        }

        let name = mapped.entry.name.clone();
        if db.insert_unique(mapped.entry) {
            info!("Application '{}' found", name);
        } else {
            debug!(
                "Application '{}' from '{}' shadowed by an earlier entry",
                name,
                path.display()
            );
        }
        Ok(())
    }
}

impl Source for DesktopSource {
    fn scan(&self, db: &mut AppDb) -> Result<(), AppDbError> {
        let dir = self.applications_dir();
        let read_dir = match fs::read_dir(&dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Directory {:?} does not exist, skipping", dir);
                return Ok(());
            }
            Err(e) => {
                warn!("Failed to open directory {:?}: {}, skipping", dir, e);
                return Ok(());
            }
        };

        debug!("Scanning desktop files in {:?}", dir);
        let before = db.len();
        for entry in read_dir {
            let entry = entry.map_err(|e| AppDbError::io(&dir, e))?;
            let file_type = entry.file_type().map_err(|e| AppDbError::io(entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }
            if !has_suffix(entry.file_name().as_bytes(), DESKTOP_SUFFIX.as_bytes()) {
                continue;
            }
            self.load_file(db, &entry.path())?;
        }

        info!("DesktopSource: {:?} contributed {} entries", dir, db.len() - before);
        Ok(())
    }
}
