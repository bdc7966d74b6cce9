// ABOUTME: Width-aware word wrapping for fixed-width printer lines
// ABOUTME: Breaks at whitespace boundaries and never hyphenates overlong words

/// Wrap `text` so no line exceeds `width` characters, except for a single
/// word longer than the width, which is emitted unbroken.
///
/// Text with embedded line breaks is wrapped line by line, never re-flowed
/// across them. Runs of whitespace within a line collapse to single spaces.
pub fn wrap_text(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut out = String::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            out.push_str(&current);
            out.push('\n');
            current = word.to_string();
            current_len = word_len;
        }
    }
    out.push_str(&current);
    out
}
