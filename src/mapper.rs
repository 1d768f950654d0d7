//! Maps parsed key/value pairs onto an [`AppEntry`].

use crate::model::AppEntry;
use crate::parser::KeyValues;
use log::debug;
use std::fmt;

/// Where a key's value lands and how it is coerced.
#[derive(Clone, Copy)]
enum Slot {
    Required(fn(&mut AppEntry) -> &mut String),
    Text(fn(&mut AppEntry) -> &mut Option<String>),
    Bool(fn(&mut AppEntry) -> &mut bool),
}

const FIELD_MAP: &[(&str, Slot)] = &[
    ("Name", Slot::Required(|e| &mut e.name)),
    ("GenericName", Slot::Text(|e| &mut e.generic_name)),
    ("Comment", Slot::Text(|e| &mut e.comment)),
    ("Icon", Slot::Text(|e| &mut e.icon)),
    ("Exec", Slot::Text(|e| &mut e.exec)),
    ("Path", Slot::Text(|e| &mut e.path)),
    ("Terminal", Slot::Bool(|e| &mut e.terminal)),
];

/// A value that could not be coerced; the field keeps its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    pub name: String,
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ignoring {}:{} bool with wrong value '{}'",
            self.name, self.key, self.value
        )
    }
}

#[derive(Debug)]
pub struct Mapped {
    pub entry: AppEntry,
    pub warnings: Vec<FieldWarning>,
}

/// Builds an entry from `kv`, or `None` when the file is not an application
/// or has no `Name`.
pub fn map_entry(kv: &KeyValues<'_>) -> Option<Mapped> {
    if kv.get("Type") != Some("Application") {
        return None;
    }
    let name = kv.get("Name").filter(|n| !n.is_empty())?;

    // Historically gated vendor entries; now informational only.
    match kv.get("X-LASH") {
        Some(x_lash) => debug!("Application '{}' has X-LASH={}", name, x_lash),
        None => debug!("Application '{}' has no X-LASH key", name),
    }

    let mut entry = AppEntry::new(String::new());
    let mut warnings = Vec::new();

    for &(key, slot) in FIELD_MAP {
        let Some(value) = kv.get(key) else {
            debug_assert!(key != "Name", "Name presence is checked above");
            continue;
        };

        match slot {
            Slot::Required(field) => *field(&mut entry) = value.to_string(),
            Slot::Text(field) => *field(&mut entry) = Some(value.to_string()),
            Slot::Bool(field) => match value {
                "true" => *field(&mut entry) = true,
                "false" => *field(&mut entry) = false,
                _ => warnings.push(FieldWarning {
                    name: name.to_string(),
                    key,
                    value: value.to_string(),
                }),
            },
        }
    }

    Some(Mapped { entry, warnings })
}
