#![no_main]

use awk_corpus::{SpanKind, scan};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Spans must partition the input exactly: contiguous, non-empty,
    // ending at the last byte, and sliceable without panicking.
    let spans = scan(data);

    let mut pos = 0;
    for span in &spans {
        assert_eq!(span.start, pos);
        assert!(span.end > span.start);
        let text = span.text(data);

        match span.kind {
            SpanKind::StringLiteral => assert!(text.starts_with('"')),
            SpanKind::Comment => assert!(text.starts_with('#')),
            SpanKind::Regex => {
                assert!(text.len() >= 2);
                assert!(text.starts_with('/') && text.ends_with('/'));
            }
            SpanKind::Text => {}
        }

        pos = span.end;
    }
    assert_eq!(pos, data.len());
});
