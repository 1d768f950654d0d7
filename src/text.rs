use crate::sources::Environment;
use std::ffi::{OsStr, OsString};

/// Returns the variable's value, or `default` when it is unset or empty.
/// The XDG base directory rules treat an empty value the same as an unset one.
pub fn xdg_var_or_default(env: &impl Environment, name: &str, default: &OsStr) -> OsString {
    match env.var(name) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_os_string(),
    }
}

/// True when `s` ends with `suffix` and has at least one byte before it.
pub fn has_suffix(s: &[u8], suffix: &[u8]) -> bool {
    s.len() > suffix.len() && s.ends_with(suffix)
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn strip_leading(s: &str) -> &str {
    s.trim_start_matches(is_blank)
}

pub fn strip_trailing(s: &str) -> &str {
    s.trim_end_matches(is_blank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::os::unix::ffi::OsStrExt;

    #[test]
    fn empty_variable_falls_back_to_default() {
        let mut env: HashMap<String, String> = HashMap::new();
        env.insert("XDG_DATA_DIRS".to_string(), String::new());
        let default = OsStr::new("/usr/share/");
        assert_eq!(xdg_var_or_default(&env, "XDG_DATA_DIRS", default), "/usr/share/");
        let home = OsStr::new("/home/x");
        assert_eq!(xdg_var_or_default(&env, "XDG_DATA_HOME", home), "/home/x");

        env.insert("XDG_DATA_HOME".to_string(), "/data".to_string());
        assert_eq!(xdg_var_or_default(&env, "XDG_DATA_HOME", home), "/data");
    }

    #[test]
    fn non_utf8_value_is_kept() {
        let raw = OsStr::from_bytes(b"/data/caf\xe9");
        let mut env: HashMap<String, OsString> = HashMap::new();
        env.insert("XDG_DATA_HOME".to_string(), raw.to_os_string());
        assert_eq!(xdg_var_or_default(&env, "XDG_DATA_HOME", OsStr::new("/home/x")), raw);
    }

    #[test]
    fn suffix_needs_a_leading_byte() {
        assert!(has_suffix(b"a.desktop", b".desktop"));
        assert!(!has_suffix(b".desktop", b".desktop"));
        assert!(!has_suffix(b"a.Desktop", b".desktop"));
        assert!(!has_suffix(b"a.desktop~", b".desktop"));
    }

    #[test]
    fn strips_only_spaces_and_tabs() {
        assert_eq!(strip_leading(" \t value"), "value");
        assert_eq!(strip_trailing("Key \t"), "Key");
        assert_eq!(strip_leading("\u{a0}x"), "\u{a0}x");
        assert_eq!(strip_trailing("x\r"), "x\r");
    }
}
