//! Placeholder rewriting: `:name` → `{{name}}`.
//!
//! Source phrases mark runtime values with a colon followed by an identifier.
//! The casing of that identifier carries meaning: `:NAME` renders the value
//! uppercased, `:Name` capitalizes it, anything else inserts it verbatim.
//! The target runtime expresses the same thing with a format directive after
//! a comma, so `:Name` becomes `{{name, capitalize}}`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z0-9_]+)").unwrap());

/// Text transform inferred from the casing of a placeholder identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    /// `:NAME` → `{{name, uppercase}}`
    Uppercase,
    /// `:Name` → `{{name, capitalize}}`
    Capitalize,
    /// `:name`, `:nAME`, ... → `{{name}}`
    None,
}

impl CaseTransform {
    pub fn infer(ident: &str) -> Self {
        if is_all_uppercase(ident) {
            CaseTransform::Uppercase
        } else if is_title_case(ident) {
            CaseTransform::Capitalize
        } else {
            CaseTransform::None
        }
    }

    pub fn directive(&self) -> Option<&'static str> {
        match self {
            CaseTransform::Uppercase => Some("uppercase"),
            CaseTransform::Capitalize => Some("capitalize"),
            CaseTransform::None => None,
        }
    }
}

/// True when the identifier is unchanged by uppercasing.
///
/// Identifiers without letters (`:1`, `:_`) also qualify.
pub fn is_all_uppercase(ident: &str) -> bool {
    ident == ident.to_ascii_uppercase()
}

/// True when the identifier equals its lowercase form with the first
/// character uppercased (`Name`, `User_id`).
pub fn is_title_case(ident: &str) -> bool {
    let lower = ident.to_ascii_lowercase();
    let mut chars = lower.chars();
    let titled = match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => return false,
    };
    ident == titled
}

/// Render one interpolation token for an identifier.
pub fn interpolation_token(ident: &str) -> String {
    let name = ident.to_ascii_lowercase();
    match CaseTransform::infer(ident).directive() {
        Some(directive) => format!("{{{{{}, {}}}}}", name, directive),
        None => format!("{{{{{}}}}}", name),
    }
}

/// Replace every `:ident` in `text` with its interpolation token.
///
/// # Examples
///
/// ```
/// use transloc::core::placeholder::rewrite;
///
/// assert_eq!(rewrite("Hello :name"), "Hello {{name}}");
/// assert_eq!(rewrite(":Name logged in"), "{{name, capitalize}} logged in");
/// assert_eq!(rewrite("WELCOME :USER"), "WELCOME {{user, uppercase}}");
/// assert_eq!(rewrite("no placeholders"), "no placeholders");
/// ```
pub fn rewrite(text: &str) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures| interpolation_token(&caps[1]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_placeholder() {
        assert_eq!(rewrite("Hello :name"), "Hello {{name}}");
        assert_eq!(rewrite(":count items"), "{{count}} items");
    }

    #[test]
    fn test_capitalize_placeholder() {
        assert_eq!(
            rewrite(":Name logged in"),
            "{{name, capitalize}} logged in"
        );
        assert_eq!(rewrite("By :User_id"), "By {{user_id, capitalize}}");
    }

    #[test]
    fn test_uppercase_placeholder() {
        assert_eq!(rewrite("Hi :NAME!"), "Hi {{name, uppercase}}!");
        assert_eq!(rewrite(":USER_ID"), "{{user_id, uppercase}}");
    }

    #[test]
    fn test_single_letter_identifiers() {
        assert_eq!(rewrite(":a"), "{{a}}");
        // A lone capital is both all-uppercase and title case; uppercase wins.
        assert_eq!(rewrite(":A"), "{{a, uppercase}}");
    }

    #[test]
    fn test_mixed_case_is_plain_lowercased() {
        assert_eq!(rewrite(":userName"), "{{username}}");
        assert_eq!(rewrite(":nAME"), "{{name}}");
        assert_eq!(rewrite(":NaMe"), "{{name}}");
    }

    #[test]
    fn test_identifiers_without_letters() {
        assert_eq!(rewrite("at :1"), "at {{1, uppercase}}");
    }

    #[test]
    fn test_multiple_and_repeated_placeholders() {
        assert_eq!(
            rewrite(":name sent :count messages to :name"),
            "{{name}} sent {{count}} messages to {{name}}"
        );
    }

    #[test]
    fn test_adjacent_placeholders() {
        assert_eq!(rewrite(":first:last"), "{{first}}{{last}}");
        assert_eq!(rewrite(":A:b"), "{{a, uppercase}}{{b}}");
    }

    #[test]
    fn test_colon_without_identifier_is_kept() {
        assert_eq!(rewrite("Note: see below"), "Note: see below");
        assert_eq!(rewrite("trailing:"), "trailing:");
        assert_eq!(rewrite("::"), "::");
    }

    #[test]
    fn test_non_ascii_text_passes_through() {
        assert_eq!(rewrite("Привет, :name!"), "Привет, {{name}}!");
        assert_eq!(rewrite("こんにちは"), "こんにちは");
    }

    #[test]
    fn test_identifier_stops_at_non_word_character() {
        assert_eq!(rewrite(":name's profile"), "{{name}}'s profile");
        assert_eq!(rewrite("(:value)"), "({{value}})");
    }

    #[test]
    fn test_case_predicates() {
        assert!(is_all_uppercase("NAME"));
        assert!(is_all_uppercase("USER_ID2"));
        assert!(!is_all_uppercase("Name"));

        assert!(is_title_case("Name"));
        assert!(is_title_case("User_id"));
        assert!(!is_title_case("NAme"));
        assert!(!is_title_case("name"));
        assert!(!is_title_case(""));
    }

    #[test]
    fn test_case_transform_directive() {
        assert_eq!(CaseTransform::infer("X").directive(), Some("uppercase"));
        assert_eq!(CaseTransform::infer("Xy").directive(), Some("capitalize"));
        assert_eq!(CaseTransform::infer("xy").directive(), None);
    }
}
