// Literal quoting
// Escaped, C-compatible spellings of character, string and buffer payloads

use std::fmt::Write;

fn push_escaped(out: &mut String, c: char, quote: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\t' => out.push_str("\\t"),
        '\r' => out.push_str("\\r"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        ' '..='~' => out.push(c),
        // Octal escapes stop after three digits, unlike `\x`
        c if c.is_ascii() => {
            let _ = write!(out, "\\{:03o}", c as u32);
        }
        c => {
            let _ = write!(out, "\\U{:08X}", c as u32);
        }
    }
}

/// Quote a byte buffer, escaping everything outside printable ASCII
pub fn quote_buffer(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &byte in bytes {
        if byte.is_ascii() {
            push_escaped(&mut out, byte as char, '"');
        } else {
            let _ = write!(out, "\\{:03o}", byte);
        }
    }
    out.push('"');
    out
}

/// Quote a string of codepoints; non-ASCII codepoints become `\UXXXXXXXX`
pub fn quote_string(string: &str) -> String {
    let mut out = String::with_capacity(string.len() + 2);
    out.push('"');
    for c in string.chars() {
        push_escaped(&mut out, c, '"');
    }
    out.push('"');
    out
}

/// Quote a single codepoint with single quotes
pub fn quote_char(c: char) -> String {
    let mut out = String::with_capacity(4);
    out.push('\'');
    push_escaped(&mut out, c, '\'');
    out.push('\'');
    out
}
