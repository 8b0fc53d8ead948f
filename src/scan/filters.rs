use regex::Regex;

fn junk_candidate_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(^|/)\.").expect("invalid hidden segment regex"),
                Regex::new(r"(?i)(^|/)thumbs\.db$").expect("invalid thumbs.db regex"),
                Regex::new(r"(?i)(^|/)desktop\.ini$").expect("invalid desktop.ini regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a discovered file should be kept out of the manifest asset list.
///
/// Hidden files and OS metadata droppings are excluded, since declaring them as
/// bundled assets only bloats the application package.
pub fn is_junk_candidate(value: &str) -> bool {
    junk_candidate_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::is_junk_candidate;

    #[test]
    fn excludes_hidden_segments() {
        assert!(is_junk_candidate(".env"));
        assert!(is_junk_candidate("assets/html/.well-known/token"));
    }

    #[test]
    fn excludes_os_metadata_files() {
        assert!(is_junk_candidate("assets/html/Thumbs.db"));
        assert!(is_junk_candidate("assets/html/thumbs.db"));
        assert!(is_junk_candidate("assets/html/Desktop.ini"));
    }

    #[test]
    fn keeps_page_files() {
        assert!(!is_junk_candidate("assets/html/index.html"));
        assert!(!is_junk_candidate("assets/html/img/logo.png"));
    }
}
