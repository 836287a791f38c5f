//! File-name to highlighting-language mapping.

/// Returns the extension of the last segment of `path`, or `""` when there is none.
///
/// The extension is everything after the final `.` of the file name, case preserved. A name
/// whose only dot is the leading one (`.gitignore`) has no extension, and neither does a name
/// ending in a dot (`notes.`).
pub fn language_for_path(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(0) | None => "",
        Some(dot) => &name[dot + 1..],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_text_after_final_dot() {
        assert_eq!(language_for_path("main.test.ts"), "ts");
        assert_eq!(language_for_path("src/main.go"), "go");
        assert_eq!(language_for_path("Cargo.TOML"), "TOML");
    }

    #[test]
    fn names_without_extension_map_to_empty() {
        assert_eq!(language_for_path("README"), "");
        assert_eq!(language_for_path("docs/Makefile"), "");
        assert_eq!(language_for_path("notes."), "");
        assert_eq!(language_for_path(""), "");
    }

    #[test]
    fn lone_leading_dot_is_not_an_extension() {
        assert_eq!(language_for_path(".gitignore"), "");
        assert_eq!(language_for_path("config/.env"), "");
        assert_eq!(language_for_path(".eslintrc.json"), "json");
    }

    #[test]
    fn dots_in_directory_names_are_ignored() {
        assert_eq!(language_for_path("pkg.v2/README"), "");
        assert_eq!(language_for_path("pkg.v2/lib.rs"), "rs");
    }
}
