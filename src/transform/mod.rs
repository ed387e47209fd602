mod spans;

pub use spans::{Span, SpanKind};

/// Rewrites every regex literal in `source` from `/.../` to backtick
/// delimiters.
///
/// String-literal and comment content passes through byte for byte; for a
/// regex literal only the two boundary slashes change, so the output always
/// has the same length as the input. The function is total: malformed or
/// truncated source still produces output, it just classifies fewer regions
/// as regex literals. A backtick already present in the source is passed
/// through as-is, not escaped.
pub fn transform(source: &str) -> String {
    let mut out = String::with_capacity(source.len());

    for span in scan(source) {
        match span.kind {
            SpanKind::Regex => {
                out.push('`');
                out.push_str(&source[span.start + 1..span.end - 1]);
                out.push('`');
            }
            _ => out.push_str(span.text(source)),
        }
    }

    out
}

/// Scans `source` left to right and partitions it into classified spans.
///
/// At each position the first matching rule wins: a `"` opens a string
/// literal, a `#` opens a comment, and a `/` opens a regex literal when a
/// closing `/` exists later in the input. Scanning resumes after each
/// consumed span, so a slash inside a string or comment never opens a regex
/// and a quote inside a regex never opens a string. The spans are
/// contiguous and cover the whole input.
pub fn scan(source: &str) -> Vec<Span> {
    let bytes = source.as_bytes();
    let mut spans = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let (kind, end) = match bytes[pos] {
            // String literal: through the next quote, or unterminated to
            // the end of the input. Escaped quotes are not recognized.
            b'"' => {
                let end = match find_byte(&bytes[pos + 1..], b'"') {
                    Some(rel) => pos + 2 + rel,
                    None => bytes.len(),
                };
                (SpanKind::StringLiteral, end)
            }

            // Comment: through the end of the line. The newline itself is
            // ordinary text.
            b'#' => {
                let end = match find_byte(&bytes[pos..], b'\n') {
                    Some(rel) => pos + rel,
                    None => bytes.len(),
                };
                (SpanKind::Comment, end)
            }

            // Regex literal: only when a closing slash exists. A slash
            // with no partner is ordinary text.
            b'/' => match find_byte(&bytes[pos + 1..], b'/') {
                Some(rel) => (SpanKind::Regex, pos + 2 + rel),
                None => {
                    pos += 1;
                    continue;
                }
            },

            _ => {
                pos += 1;
                continue;
            }
        };

        if text_start < pos {
            spans.push(Span::new(SpanKind::Text, text_start, pos));
        }
        spans.push(Span::new(kind, pos, end));
        pos = end;
        text_start = end;
    }

    if text_start < bytes.len() {
        spans.push(Span::new(SpanKind::Text, text_start, bytes.len()));
    }

    spans
}

fn find_byte(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}
