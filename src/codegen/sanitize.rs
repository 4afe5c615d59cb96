use crate::scene::scene_model::SceneNode;

/// Turn a layer name into an identifier segment.
///
/// Whitespace is dropped, anything outside `[A-Za-z0-9]` becomes `_`, and a
/// leading digit gets a `_` in front. An empty or all-whitespace name yields
/// an empty segment.
pub fn sanitize(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Layers whose name starts with `_` are private and skipped with their subtree.
pub fn should_visit(node: &SceneNode) -> bool {
    !node.name.starts_with('_')
}

/// True when `s` is usable as a C identifier.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_whitespace_before_replacing() {
        assert_eq!(sanitize("Frame 1"), "Frame1");
        assert_eq!(sanitize(" tab\there "), "tabhere");
    }

    #[test]
    fn replaces_punctuation_and_non_ascii() {
        assert_eq!(sanitize("icon-close.svg"), "icon_close_svg");
        assert_eq!(sanitize("caf\u{e9}"), "caf_");
    }

    #[test]
    fn leading_digit_is_prefixed() {
        assert_eq!(sanitize("1st button"), "_1stbutton");
        assert_eq!(sanitize("42"), "_42");
    }

    #[test]
    fn empty_names_stay_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn identifier_check() {
        assert!(is_valid_identifier("fbh_Frame1"));
        assert!(is_valid_identifier("_"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier("a-b"));
    }
}
