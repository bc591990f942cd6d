/// Maps a backend category label onto a [`Tag`](crate::components::tag::Tag)
/// variant. Unknown labels render with the neutral style.
pub fn category_variant(category: &str) -> &'static str {
    match category.to_ascii_lowercase().as_str() {
        "productive" => "productive",
        "unproductive" => "unproductive",
        _ => "neutral",
    }
}

pub fn validate_submission(email_text: &str, has_file: bool) -> Result<(), String> {
    if email_text.trim().is_empty() && !has_file {
        return Err("Paste an email or attach a file to analyze.".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_variant_is_case_insensitive() {
        assert_eq!(category_variant("Productive"), "productive");
        assert_eq!(category_variant("UNPRODUCTIVE"), "unproductive");
        assert_eq!(category_variant("Spam"), "neutral");
    }

    #[test]
    fn submission_needs_text_or_a_file() {
        assert!(validate_submission("", false).is_err());
        assert!(validate_submission("   ", false).is_err());
        assert!(validate_submission("hello", false).is_ok());
        assert!(validate_submission("", true).is_ok());
    }
}
