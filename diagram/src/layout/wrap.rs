//! Word wrapping for documentation text.
//!
//! The line breaks must match the wrapping routine diagrams have always been produced with, so
//! the algorithm is deliberately simple: break at the last space that fits, or split the word if
//! no space fits.

/// Wraps `text` to lines of at most `columns` characters.
///
/// Existing line breaks are kept and each line is wrapped on its own. A line is only wrapped if
/// it is longer than `columns`; it is then broken at the last space at or before the column
/// limit (dropping the space), or exactly at the limit if there is no such space. Spaces at the
/// start of a continuation are skipped.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    text.split('\n')
        .flat_map(|line| wrap_line(line.strip_suffix('\r').unwrap_or(line), columns))
        .collect()
}

fn wrap_line(line: &str, columns: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut lines = Vec::new();
    let mut offset = 0;

    while chars.len() - offset > columns {
        if chars[offset] == ' ' {
            offset += 1;
            continue;
        }

        let limit = offset + columns;
        match chars[offset..=limit].iter().rposition(|c| *c == ' ') {
            Some(space) => {
                lines.push(chars[offset..offset + space].iter().collect());
                offset += space + 1;
            }
            None => {
                lines.push(chars[offset..limit].iter().collect());
                offset = limit;
            }
        }
    }

    lines.push(chars[offset..].iter().collect());
    lines
}
