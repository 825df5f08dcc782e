//! Request composer — builds the single user prompt sent to the model.

/// Lays out the artist name, the verbatim resume, and the verbatim rubric in
/// fixed labeled sections. Pure concatenation; no content is transformed.
///
/// The handler guarantees `prompt_template` and `artist_resume` are non-empty
/// before calling this; `artist_name` may be empty.
pub fn compose_prompt(prompt_template: &str, artist_name: &str, artist_resume: &str) -> String {
    format!("Artist: \"{artist_name}\"\n\nArtist Resume/Bio:\n{artist_resume}\n\n{prompt_template}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_appear_in_order() {
        let prompt = compose_prompt("Score this artist.", "Jane Doe", "MFA, two solo shows.");
        let name_at = prompt.find("Artist: \"Jane Doe\"").unwrap();
        let resume_at = prompt.find("Artist Resume/Bio:\nMFA, two solo shows.").unwrap();
        let template_at = prompt.find("Score this artist.").unwrap();
        assert!(name_at < resume_at);
        assert!(resume_at < template_at);
    }

    #[test]
    fn test_template_separated_by_blank_line() {
        let prompt = compose_prompt("Score this artist.", "Jane Doe", "Resume text.");
        assert!(prompt.ends_with("Resume text.\n\nScore this artist."));
    }

    #[test]
    fn test_empty_artist_name_is_allowed() {
        let prompt = compose_prompt("Score this artist.", "", "Resume text.");
        assert!(prompt.starts_with("Artist: \"\"\n\n"));
    }

    #[test]
    fn test_content_is_passed_through_verbatim() {
        let resume = "Line one.\nLine two: 100% \"quoted\".";
        let prompt = compose_prompt("Template.", "Name", resume);
        assert!(prompt.contains(resume));
    }
}
