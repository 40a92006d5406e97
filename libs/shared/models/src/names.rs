/// Upper-cases the first character of a name and lower-cases the rest,
/// so "sMITH" and "smith" are both stored as "Smith".
pub fn capitalize(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
