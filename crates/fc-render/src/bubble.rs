//! Speech bubble layout.

/// Word-wrap `text` to at most `width` characters per line.
///
/// Runs of whitespace collapse to one space and words longer than `width` are
/// split. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(chars[..width].iter().collect());
            chars = chars.split_off(width);
        }

        if current_len == 0 {
            current.extend(&chars);
            current_len = chars.len();
        } else if current_len + 1 + chars.len() <= width {
            current.push(' ');
            current.extend(&chars);
            current_len += 1 + chars.len();
        } else {
            lines.push(std::mem::replace(&mut current, chars.iter().collect()));
            current_len = chars.len();
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draw the bubble around pre-wrapped lines.
///
/// A single line uses `< >` borders; several lines use `/ \`, `| |`, `\ /`.
pub fn balloon(lines: &[String]) -> String {
    let inner = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let last = lines.len().saturating_sub(1);

    let mut out = format!(" {}\n", "_".repeat(inner + 2));
    for (i, line) in lines.iter().enumerate() {
        let (open, close) = match i {
            _ if lines.len() == 1 => ('<', '>'),
            0 => ('/', '\\'),
            i if i == last => ('\\', '/'),
            _ => ('|', '|'),
        };
        let pad = " ".repeat(inner - line.chars().count());
        out.push_str(&format!("{open} {line}{pad} {close}\n"));
    }
    out.push_str(&format!(" {}", "-".repeat(inner + 2)));
    out
}
