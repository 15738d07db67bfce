/// `golden-trophy` -> `Golden Trophy`.
///
/// Only the first character of each hyphen-delimited word is touched; empty
/// words from doubled hyphens are kept, so `a--b` -> `A  B`.
pub fn format_slug(segment: &str) -> String {
    segment
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
