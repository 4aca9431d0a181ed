/// Maximum length for derived names (Kubernetes label limit).
const MAX_NAME_LEN: usize = 63;

/// Normalize an arbitrary string to a DNS-label-safe name.
///
/// Lowercases the input, replaces disallowed characters with `-`, strips
/// leading characters up to the first letter and trailing separators, and
/// truncates to 63 characters. Falls back to `"default"` when nothing
/// survives normalization.
pub fn kubify_name(raw: &str) -> String {
    let mut name: String = raw
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' { c } else { '-' })
        .collect();

    // Names must start with a letter.
    let start = name.find(|c: char| c.is_ascii_lowercase()).unwrap_or(name.len());
    name.drain(..start);

    let end = name.trim_end_matches(|c: char| !c.is_ascii_alphanumeric()).len();
    name.truncate(end.min(MAX_NAME_LEN));

    if name.is_empty() { "default".to_string() } else { name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_plain_names() {
        assert_eq!(kubify_name("Demo"), "demo");
    }

    #[test]
    fn replaces_disallowed_characters_with_dashes() {
        assert_eq!(kubify_name("My_Project"), "my-project");
        assert_eq!(kubify_name("hello world"), "hello-world");
    }

    #[test]
    fn strips_leading_non_letters() {
        assert_eq!(kubify_name("123abc"), "abc");
        assert_eq!(kubify_name("--web"), "web");
    }

    #[test]
    fn strips_trailing_separators() {
        assert_eq!(kubify_name("abc--"), "abc");
        assert_eq!(kubify_name("abc_"), "abc");
    }

    #[test]
    fn keeps_interior_digits_and_dashes() {
        assert_eq!(kubify_name("app-v2"), "app-v2");
    }

    #[test]
    fn falls_back_to_default_when_nothing_survives() {
        assert_eq!(kubify_name(""), "default");
        assert_eq!(kubify_name("!!!"), "default");
        assert_eq!(kubify_name("123"), "default");
    }

    #[test]
    fn truncates_to_label_limit() {
        let long = "a".repeat(100);
        assert_eq!(kubify_name(&long).len(), 63);
    }
}
