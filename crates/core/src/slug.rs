//! URL slug generation and validation for blog posts.

/// Generate a URL-safe slug from a title.
///
/// Converts to lowercase, replaces anything that is not an ASCII letter or
/// digit with a hyphen, collapses consecutive hyphens, and trims
/// leading/trailing hyphens.
pub fn generate_slug(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut prev_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }

    result.trim_matches('-').to_string()
}

/// A slug is non-empty and contains only lowercase ASCII letters, digits and
/// single hyphens between them.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_from_title() {
        assert_eq!(generate_slug("Hello, World!"), "hello-world");
        assert_eq!(generate_slug("  Rust -- in Production  "), "rust-in-production");
        assert_eq!(generate_slug("Café 2024"), "caf-2024");
    }

    #[test]
    fn generated_slugs_are_valid() {
        for title in ["A Title", "with/slashes/and?query", "MiXeD 123"] {
            assert!(is_valid_slug(&generate_slug(title)), "{title}");
        }
    }

    #[test]
    fn rejects_malformed_slugs() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Upper-Case"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("has space"));
    }
}
