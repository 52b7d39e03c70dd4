//! Greedy word wrap against real glyph advances.

use crate::dossier::metrics;

/// Wrap `text` to `max_width` millimetres at `size` points. Embedded
/// newlines force breaks; a word wider than the column is split hard.
/// Always yields at least one line.
pub fn wrap(text: &str, max_width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        wrap_line(raw.trim_end_matches('\r'), max_width, size, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_line(raw: &str, max_width: f32, size: f32, out: &mut Vec<String>) {
    if raw.trim().is_empty() {
        out.push(String::new());
        return;
    }

    let mut current = String::new();
    for word in raw.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if metrics::text_width_mm(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if metrics::text_width_mm(word, size) > max_width {
            current = split_hard(word, max_width, size, out);
        } else {
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

/// Break an unbroken over-long word at the column edge; the tail that still
/// fits is returned as the open line.
fn split_hard(word: &str, max_width: f32, size: f32, out: &mut Vec<String>) -> String {
    let mut piece = String::new();
    for ch in word.chars() {
        piece.push(ch);
        if metrics::text_width_mm(&piece, size) > max_width && piece.chars().count() > 1 {
            let overflow = piece.pop().unwrap();
            out.push(std::mem::take(&mut piece));
            piece.push(overflow);
        }
    }
    piece
}
