/// French elision for the first-person subject: a literal `je` followed by a
/// vowel-initial word contracts into one fragment (`je` + `aime` ->
/// `j'aime`). This is the only contraction the builder data needs; le/la ->
/// l' and the other elisions are out of scope here.
///
/// Single left-to-right pass with an index cursor that advances by one, or
/// by two when a merge consumed the following fragment.
pub fn apply_elision(parts: &[String]) -> Vec<String> {
    let mut result = Vec::with_capacity(parts.len());
    let mut i = 0;

    while i < parts.len() {
        if parts[i] == "je" {
            if let Some(next) = parts.get(i + 1) {
                if starts_with_vowel(next) {
                    result.push(format!("j'{next}"));
                    i += 2;
                    continue;
                }
            }
        }
        result.push(parts[i].clone());
        i += 1;
    }

    result
}

fn starts_with_vowel(word: &str) -> bool {
    word.chars()
        .next()
        .map(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .unwrap_or(false)
}
