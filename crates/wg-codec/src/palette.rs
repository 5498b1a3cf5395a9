//! Reference palette — a color that matches an entry exactly is written as its index.

pub const PALETTE: [&str; 16] = [
    "#667EEA", "#764BA2", "#ffffff", "#000000",
    "#1f2937", "#6b7280", "#e5e7eb", "#ef4444",
    "#f59e0b", "#10b981", "#3b82f6", "#8b5cf6",
    "#ec4899", "#14b8a6", "#f97316", "#f3f4f6",
];

/// Exact, case-sensitive match.
pub fn index_of(color: &str) -> Option<usize> {
    PALETTE.iter().position(|c| *c == color)
}

/// Lowercase hex nibble for a palette index.
pub fn nibble(index: usize) -> Option<char> {
    if index >= PALETTE.len() {
        return None;
    }
    char::from_digit(index as u32, 16)
}

pub fn shorten(color: &str) -> Option<char> {
    index_of(color).and_then(nibble)
}

/// Expand a single hex nibble back to its palette color.
pub fn expand(code: &str) -> Option<&'static str> {
    let mut chars = code.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let index = c.to_digit(16)? as usize;
    PALETTE.get(index).copied()
}
