//! awk-corpus - AWK lexer test-corpus builder
//!
//! This crate fetches real-world AWK programs from GitHub code search and
//! produces two parallel fixture corpora: the original files, and copies in
//! which every regex literal is re-delimited from `/.../` to backticks, so a
//! lexer or parser can be exercised against an alternate regex-literal
//! syntax without writing AWK programs by hand.
//!
//! # Example
//!
//! ```
//! use awk_corpus::transform;
//!
//! let rewritten = transform(r#"/^foo/ { print "match/here" }"#);
//! assert_eq!(rewritten, r#"`^foo` { print "match/here" }"#);
//! ```
//!
//! Slashes inside string literals and comments are never touched:
//!
//! ```
//! use awk_corpus::transform;
//!
//! let source = "$1 ~ /err/ { print \"2/3\", $0 }  # log/4";
//! assert_eq!(transform(source), "$1 ~ `err` { print \"2/3\", $0 }  # log/4");
//! ```
//!
//! # Classification Example
//!
//! The underlying scanner partitions source text into classified spans;
//! `transform` is a reassembly of that partition.
//!
//! ```
//! use awk_corpus::{scan, SpanKind};
//!
//! let spans = scan("# comment with /slashes/");
//! assert_eq!(spans.len(), 1);
//! assert_eq!(spans[0].kind, SpanKind::Comment);
//! ```

pub mod corpus;
pub mod error;
pub mod github;
pub mod transform;

pub use corpus::CorpusWriter;
pub use error::{Error, Result};
pub use github::{Client, SearchItem, pick_page};
pub use transform::{Span, SpanKind, scan, transform};
