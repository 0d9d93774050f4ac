use itertools::Itertools;

/// Join sentence fragments into a finished sentence: single spaces between
/// fragments, a single leading capital, and a terminal period unless the
/// fragments already end in sentence punctuation.
pub fn assemble(parts: &[String]) -> String {
    let mut sentence = capitalize_first(&parts.iter().join(" "));

    if !sentence.ends_with('.') && !sentence.ends_with('!') && !sentence.ends_with('?') {
        sentence.push('.');
    }

    sentence
}

/// Uppercase only the first character; the rest of the string is untouched.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_assemble_capitalizes_and_punctuates() {
        let result = assemble(&parts(&["j'aime", "le", "chat"]));
        assert_eq!(result, "J'aime le chat.");
    }

    #[test]
    fn test_assemble_keeps_existing_terminator() {
        let result = assemble(&parts(&["comment", "vas", "tu", "?"]));
        assert_eq!(result, "Comment vas tu ?");
    }

    #[test]
    fn test_assemble_keeps_exclamation() {
        let result = assemble(&parts(&["c'est", "génial", "!"]));
        assert_eq!(result, "C'est génial !");
    }

    #[test]
    fn test_assemble_single_fragment() {
        let result = assemble(&parts(&["bonjour"]));
        assert_eq!(result, "Bonjour.");
    }

    #[test]
    fn test_only_first_character_is_uppercased() {
        let result = assemble(&parts(&["le", "Week-End", "arrive"]));
        assert_eq!(result, "Le Week-End arrive.");
    }

    #[test]
    fn test_capitalize_first_handles_accents() {
        assert_eq!(capitalize_first("écoute"), "Écoute");
        assert_eq!(capitalize_first(""), "");
    }
}
