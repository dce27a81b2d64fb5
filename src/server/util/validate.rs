//! Input format checks shared by services.

/// Loose structural email check: one `@`, a non-empty local part, and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Phone numbers may contain spaces, dashes and a leading `+`, and must hold 10 to 15 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let trimmed = phone.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
    {
        return false;
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    (10..=15).contains(&digits)
}

/// Slugs are lower-case ASCII alphanumerics and dashes.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_rejects_emails() {
        assert!(is_valid_email("ama@tastybite.com"));
        assert!(!is_valid_email("ama.tastybite.com"));
        assert!(!is_valid_email("@tastybite.com"));
        assert!(!is_valid_email("ama@localhost"));
        assert!(!is_valid_email("a ma@tastybite.com"));
    }

    #[test]
    fn accepts_and_rejects_phones() {
        assert!(is_valid_phone("0241234567"));
        assert!(is_valid_phone("+233 24 123 4567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("0241234567abc"));
    }

    #[test]
    fn accepts_and_rejects_slugs() {
        assert!(is_valid_slug("main-courses"));
        assert!(is_valid_slug("drinks2"));
        assert!(is_valid_slug("main--courses"));
        assert!(is_valid_slug("-main"));
        assert!(!is_valid_slug("Main-Courses"));
        assert!(!is_valid_slug("main_courses"));
        assert!(!is_valid_slug("main courses"));
        assert!(!is_valid_slug(""));
    }
}
