//! Advance widths for the built-in Helvetica face (WinAnsi encoding), in
//! thousandths of an em, from the Adobe core font metrics. Wrapping measures
//! against these so line breaks land where the viewer actually renders them.

const PT_TO_MM: f32 = 25.4 / 72.0;

/// 0x20..=0x7E.
#[rustfmt::skip]
const ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// 0xA0..=0xFF.
#[rustfmt::skip]
const LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// WinAnsi byte for `c`, when the encoding has one.
fn winansi_byte(c: char) -> Option<u8> {
    let cp = c as u32;
    match cp {
        0x20..=0x7E | 0xA0..=0xFF => Some(cp as u8),
        0x20AC => Some(0x80),
        0x201A => Some(0x82),
        0x0192 => Some(0x83),
        0x201E => Some(0x84),
        0x2026 => Some(0x85),
        0x2020 => Some(0x86),
        0x2021 => Some(0x87),
        0x02C6 => Some(0x88),
        0x2030 => Some(0x89),
        0x0160 => Some(0x8A),
        0x2039 => Some(0x8B),
        0x0152 => Some(0x8C),
        0x017D => Some(0x8E),
        0x2018 => Some(0x91),
        0x2019 => Some(0x92),
        0x201C => Some(0x93),
        0x201D => Some(0x94),
        0x2022 => Some(0x95),
        0x2013 => Some(0x96),
        0x2014 => Some(0x97),
        0x02DC => Some(0x98),
        0x2122 => Some(0x99),
        0x0161 => Some(0x9A),
        0x203A => Some(0x9B),
        0x0153 => Some(0x9C),
        0x017E => Some(0x9E),
        0x0178 => Some(0x9F),
        _ => None,
    }
}

/// Encode for a WinAnsi text string; characters outside the encoding
/// degrade to '?'.
pub fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| winansi_byte(c).unwrap_or(b'?'))
        .collect()
}

/// Advance width of one character in thousandths of an em.
pub fn advance(c: char) -> u16 {
    let cp = c as u32;
    match cp {
        0x20..=0x7E => ASCII[(cp - 0x20) as usize],
        0xA0..=0xFF => LATIN1[(cp - 0xA0) as usize],
        _ => match c {
            '\u{20AC}' | '\u{2020}' | '\u{2021}' | '\u{0192}' => 556,
            '\u{201A}' | '\u{2018}' | '\u{2019}' => 222,
            '\u{201E}' | '\u{201C}' | '\u{201D}' | '\u{02C6}' | '\u{02DC}' | '\u{2039}'
            | '\u{203A}' => 333,
            '\u{2026}' | '\u{2030}' | '\u{2014}' | '\u{0152}' | '\u{2122}' => 1000,
            '\u{0160}' | '\u{0178}' => 667,
            '\u{017D}' => 611,
            '\u{2022}' => 350,
            '\u{2013}' => 556,
            '\u{0161}' | '\u{017E}' => 500,
            '\u{0153}' => 944,
            // Outside the encoding: rendered as '?', measured as '?'.
            _ => ASCII[(b'?' - 0x20) as usize],
        },
    }
}

/// Width of `text` in millimetres at `size` points.
pub fn text_width_mm(text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| advance(c) as u32).sum();
    (units as f32 / 1000.0) * size * PT_TO_MM
}
