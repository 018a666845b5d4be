//! Fixed-metric text wrapping
//!
//! Wraps text into lines that fit the usable page width using a flat
//! average-character-width approximation instead of real glyph metrics.
//! The error this introduces is absorbed by the equally approximate 7 mm
//! line height used for block measurement, so both stay in step.

/// Average glyph advance as a fraction of the font size, Helvetica-like.
const AVG_CHAR_WIDTH_EM: f64 = 0.5;

const MM_PER_PT: f64 = 25.4 / 72.0;

/// Approximate advance of one character, in millimetres, at the given
/// font size.
pub fn char_width_mm(font_size_pt: f64) -> f64 {
    font_size_pt * AVG_CHAR_WIDTH_EM * MM_PER_PT
}

/// Approximate rendered width of a string, in millimetres.
pub fn text_width_mm(text: &str, font_size_pt: f64) -> f64 {
    text.chars().count() as f64 * char_width_mm(font_size_pt)
}

/// Wrap `content` into lines no wider than `max_width_mm` at the given
/// font size.
///
/// Explicit newlines are preserved as line boundaries (including blank
/// lines). Words are filled greedily; a single word wider than a full
/// line is hard-broken at the column limit.
pub fn wrap_text(content: &str, max_width_mm: f64, font_size_pt: f64) -> Vec<String> {
    let max_chars = (max_width_mm / char_width_mm(font_size_pt)).floor().max(1.0) as usize;

    let mut lines = Vec::new();
    for raw_line in content.split('\n') {
        wrap_line(raw_line, max_chars, &mut lines);
    }
    lines
}

fn wrap_line(raw: &str, max_chars: usize, out: &mut Vec<String>) {
    let start = out.len();
    let mut line = String::new();
    let mut line_chars = 0usize;

    for word in raw.split_whitespace() {
        let word_chars = word.chars().count();
        let separator = usize::from(line_chars > 0);

        if line_chars + separator + word_chars <= max_chars {
            if separator == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_chars += separator + word_chars;
            continue;
        }

        // The word does not fit on the current line.
        if line_chars > 0 {
            out.push(std::mem::take(&mut line));
            line_chars = 0;
        }

        if word_chars <= max_chars {
            line.push_str(word);
            line_chars = word_chars;
        } else {
            // Hard-break an overlong word at the column limit.
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                if chunk.len() == max_chars {
                    out.push(chunk.iter().collect());
                } else {
                    line = chunk.iter().collect();
                    line_chars = chunk.len();
                }
            }
        }
    }

    // Flush the last partial line; an input line with no words still
    // produces one (blank) output line.
    if line_chars > 0 || out.len() == start {
        out.push(line);
    }
}
