//! XDG base directory resolution and the collection build.

use crate::error::AppDbError;
use crate::model::AppDb;
use crate::parser::MAX_KEYS;
use crate::sources::desktop::DesktopSource;
use crate::sources::{Environment, ProcessEnv, Source};
use crate::text::xdg_var_or_default;
use log::{debug, error, info};
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIRS: &str = "/usr/local/share/:/usr/share/";

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Per-file cap on key/value pairs.
    pub max_keys: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { max_keys: MAX_KEYS }
    }
}

/// Base directories in precedence order: data-home, then each data-dirs
/// segment left to right. Empty segments are dropped.
///
/// Values are taken as raw bytes; only an unset `HOME` is an error.
pub fn resolve_base_dirs(env: &impl Environment) -> Result<Vec<PathBuf>, AppDbError> {
    let mut default_home = env.var("HOME").ok_or(AppDbError::MissingHome)?;
    default_home.push("/.local/share");

    let data_home = xdg_var_or_default(env, "XDG_DATA_HOME", &default_home);
    let data_dirs = xdg_var_or_default(env, "XDG_DATA_DIRS", OsStr::new(DEFAULT_DATA_DIRS));

    let mut dirs = vec![PathBuf::from(data_home)];
    for dir in data_dirs.as_bytes().split(|&b| b == b':') {
        if dir.is_empty() {
            debug!("Ignoring empty XDG_DATA_DIRS segment");
            continue;
        }
        dirs.push(PathBuf::from(OsStr::from_bytes(dir)));
    }
    Ok(dirs)
}

/// Runs every source in order into a fresh collection.
///
/// Stops at the first failing source; the entries gathered so far are
/// dropped with the partial collection.
pub fn build<S: Source>(sources: impl IntoIterator<Item = S>) -> Result<AppDb, AppDbError> {
    let mut db = AppDb::new();
    for source in sources {
        source
            .scan(&mut db)
            .inspect_err(|e| error!("Loading of appdb failed: {}", e))?;
    }

    info!("appdb: loaded {} applications", db.len());
    Ok(db)
}

/// Builds the collection from the given environment.
pub fn load_with(env: &impl Environment, opts: &LoadOptions) -> Result<AppDb, AppDbError> {
    let dirs = resolve_base_dirs(env).inspect_err(|e| error!("{}", e))?;
    build(dirs.into_iter().map(|dir| DesktopSource::new(dir, opts.max_keys)))
}

/// Builds the collection from the process environment with default options.
pub fn load() -> Result<AppDb, AppDbError> {
    load_with(&ProcessEnv, &LoadOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppEntry;
    use std::collections::HashMap;
    use std::ffi::OsString;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_follow_home() {
        let dirs = resolve_base_dirs(&env(&[("HOME", "/home/u")])).unwrap();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/home/u/.local/share"),
                PathBuf::from("/usr/local/share/"),
                PathBuf::from("/usr/share/"),
            ]
        );
    }

    #[test]
    fn empty_overrides_use_defaults() {
        let dirs = resolve_base_dirs(&env(&[
            ("HOME", "/home/u"),
            ("XDG_DATA_HOME", ""),
            ("XDG_DATA_DIRS", ""),
        ]))
        .unwrap();
        assert_eq!(dirs.len(), 3);
        assert_eq!(dirs[0], PathBuf::from("/home/u/.local/share"));
        assert_eq!(dirs[2], PathBuf::from("/usr/share/"));
    }

    #[test]
    fn overrides_keep_order() {
        let dirs = resolve_base_dirs(&env(&[
            ("HOME", "/home/u"),
            ("XDG_DATA_HOME", "/data"),
            ("XDG_DATA_DIRS", "/b::/a:"),
        ]))
        .unwrap();
        assert_eq!(
            dirs,
            vec![PathBuf::from("/data"), PathBuf::from("/b"), PathBuf::from("/a")]
        );
    }

    #[test]
    fn home_is_required_even_with_data_home() {
        let err = resolve_base_dirs(&env(&[("XDG_DATA_HOME", "/data")])).unwrap_err();
        assert!(matches!(err, AppDbError::MissingHome));
    }

    #[test]
    fn non_utf8_home_is_not_missing() {
        let mut env: HashMap<String, OsString> = HashMap::new();
        env.insert("HOME".to_string(), OsStr::from_bytes(b"/home/caf\xe9").to_os_string());
        env.insert(
            "XDG_DATA_DIRS".to_string(),
            OsStr::from_bytes(b"/opt/\xff:/usr/share").to_os_string(),
        );

        let dirs = resolve_base_dirs(&env).unwrap();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from(OsStr::from_bytes(b"/home/caf\xe9/.local/share")),
                PathBuf::from(OsStr::from_bytes(b"/opt/\xff")),
                PathBuf::from("/usr/share"),
            ]
        );
    }

    #[test]
    fn empty_home_is_concatenated() {
        let dirs = resolve_base_dirs(&env(&[("HOME", "")])).unwrap();
        assert_eq!(dirs[0], PathBuf::from("/.local/share"));
    }

    enum Step {
        Add(&'static str),
        Fail,
    }

    impl Source for Step {
        fn scan(&self, db: &mut AppDb) -> Result<(), AppDbError> {
            match self {
                Step::Add(name) => {
                    db.insert_unique(AppEntry::new(name.to_string()));
                    Ok(())
                }
                Step::Fail => Err(AppDbError::io(
                    "/broken/applications/a.desktop",
                    io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                )),
            }
        }
    }

    #[test]
    fn build_runs_sources_in_order() {
        let db = build([Step::Add("B"), Step::Add("A"), Step::Add("B")]).unwrap();
        assert_eq!(db.names().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn failure_after_entries_discards_everything() {
        let err = build([Step::Add("Foo"), Step::Fail, Step::Add("Bar")]).unwrap_err();
        assert!(matches!(err, AppDbError::Io { ref path, .. } if path.ends_with("a.desktop")));
    }

    #[test]
    fn failing_source_after_data_home_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let apps = tmp.path().join("applications");
        fs::create_dir_all(&apps).unwrap();
        fs::write(apps.join("foo.desktop"), "[Desktop Entry]\nType=Application\nName=Foo\n")
            .unwrap();

        let home: Box<dyn Source> = Box::new(DesktopSource::new(tmp.path(), MAX_KEYS));
        assert_eq!(build([home]).unwrap().len(), 1);

        let sources: Vec<Box<dyn Source>> = vec![
            Box::new(DesktopSource::new(tmp.path(), MAX_KEYS)),
            Box::new(Step::Fail),
        ];
        assert!(matches!(build(sources), Err(AppDbError::Io { .. })));
    }
}
