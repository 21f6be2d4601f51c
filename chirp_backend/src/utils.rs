use chrono::Utc;

pub const APP_NAME: &str = "chirp";

pub fn now_utc_iso() -> String {
    Utc::now().to_rfc3339()
}

pub fn print_banner() {
    println!("{APP_NAME} {}", env!("CARGO_PKG_VERSION"));
}

/// Truncates to `max` characters, appending an ellipsis when shortened.
pub fn preview(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

/// Up to two upper-cased initials taken from the words of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
