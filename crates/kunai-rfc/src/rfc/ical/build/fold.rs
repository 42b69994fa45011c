//! Content line folding (RFC 5545 §3.1).

use kunai_core::constants::MAX_LINE_OCTETS;

const FOLD: &str = "\r\n ";

/// Splits a line into physical lines of at most 75 octets, joined by
/// CRLF and a space. The leading space counts toward each continuation
/// line. Multi-octet characters are never split.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded =
        String::with_capacity(line.len() + FOLD.len() * (line.len() / MAX_LINE_OCTETS));
    let mut segment_start = 0;
    let mut budget = MAX_LINE_OCTETS;

    for (offset, ch) in line.char_indices() {
        if offset + ch.len_utf8() - segment_start > budget {
            folded.push_str(&line[segment_start..offset]);
            folded.push_str(FOLD);
            segment_start = offset;
            budget = MAX_LINE_OCTETS - 1;
        }
    }
    folded.push_str(&line[segment_start..]);
    folded
}
