use crate::error::AppDbError;
use crate::model::AppDb;
use std::collections::HashMap;
use std::ffi::OsString;

/// Something that contributes entries to an in-progress collection.
pub trait Source {
    fn scan(&self, db: &mut AppDb) -> Result<(), AppDbError>;
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn scan(&self, db: &mut AppDb) -> Result<(), AppDbError> {
        (**self).scan(db)
    }
}

/// Read-only view of environment variables. Values are raw bytes, not
/// necessarily UTF-8.
pub trait Environment {
    fn var(&self, name: &str) -> Option<OsString>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

impl Environment for HashMap<String, OsString> {
    fn var(&self, name: &str) -> Option<OsString> {
        self.get(name).cloned()
    }
}

pub mod desktop;
pub mod xdg;
