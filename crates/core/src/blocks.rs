//! Splitting raw markup into slide blocks.
//!
//! A block is a run of lines bounded by blank lines or `---` separator
//! lines. Handles both `\n` and `\r\n` line endings.

/// Literal separator line (ignoring surrounding whitespace).
const SEPARATOR: &str = "---";

/// Byte order mark some editors write at the start of a file.
const BOM: char = '\u{FEFF}';

/// Whether a line delimits blocks.
fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed == SEPARATOR
}

/// Split markup into trimmed, non-empty blocks in source order.
pub fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let text = text.strip_prefix(BOM).unwrap_or(text);

    for line in text.lines() {
        if is_separator(line) {
            flush(&mut buffer, &mut blocks);
        } else {
            buffer.push(line);
        }
    }
    flush(&mut buffer, &mut blocks);

    blocks
}

/// Emit the buffered lines as a block if any carry content, then clear the buffer.
fn flush(buffer: &mut Vec<&str>, blocks: &mut Vec<String>) {
    while buffer.last().is_some_and(|l| l.trim().is_empty()) {
        buffer.pop();
    }

    if buffer.iter().any(|l| !l.trim().is_empty()) {
        blocks.push(buffer.join("\n").trim().to_string());
    }
    buffer.clear();
}

/// Split a block into its trimmed, non-blank lines.
pub fn block_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}
