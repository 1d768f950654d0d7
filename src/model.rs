use log::debug;
use serde::Serialize;

/// One application described by a desktop file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppEntry {
    pub name: String,                 // Specific name, e.g. "Ingen"
    pub generic_name: Option<String>, // e.g. "Audio Editor"
    pub comment: Option<String>,      // Tooltip text
    pub icon: Option<String>,         // Icon name/path
    pub exec: Option<String>,         // Command line, possibly with field codes
    pub path: Option<String>,         // Working directory
    pub terminal: bool,
}

impl AppEntry {
    pub fn new(name: String) -> Self {
        Self {
            name,
            generic_name: None,
            comment: None,
            icon: None,
            exec: None,
            path: None,
            terminal: false,
        }
    }
}

/// Applications in discovery order, unique by name.
///
/// Built once by [`crate::load`] and read-only afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AppDb {
    entries: Vec<AppEntry>,
}

impl AppDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` unless an entry with the same name is already present.
    /// Returns whether it was inserted.
    pub(crate) fn insert_unique(&mut self, entry: AppEntry) -> bool {
        if self.contains(&entry.name) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn get(&self, name: &str) -> Option<&AppEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AppEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn as_slice(&self) -> &[AppEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Destroys every entry. Takes `self`, so it can only happen once.
    pub fn release(self) {
        debug!("Releasing {} appdb entries", self.entries.len());
        drop(self);
    }
}

impl<'a> IntoIterator for &'a AppDb {
    type Item = &'a AppEntry;
    type IntoIter = std::slice::Iter<'a, AppEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
