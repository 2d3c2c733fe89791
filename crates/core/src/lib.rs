// crates/core/src/lib.rs
//! # scss_tags core
//!
//! Single-pass lexical scanner that pulls selectors, class names and id names
//! out of stylesheet source text.
//!
//! - [`scanner`]: line dispatcher and declaration scanner
//! - [`state`]: the scan state machine and `@` directives
//! - [`kind`] / [`tag`]: tag kinds and emitted tag records
//! - [`source`] / [`sink`]: the line-input and tag-output seams
//! - [`language`]: registration metadata (name, extensions, kinds)
//!
//! ```rust
//! use scss_tags_core::{TagKind, scan_str};
//!
//! let tags = scan_str(".foo, .bar { color: red; }");
//! assert_eq!(tags[0].key(), (TagKind::Class, "foo"));
//! assert_eq!(tags[1].key(), (TagKind::Class, "bar"));
//! ```

#![no_std]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod kind;
pub mod language;
pub mod scanner;
pub mod sink;
pub mod source;
pub mod state;
pub mod tag;

pub use kind::{KindSet, ParseKindError, TagKind};
pub use language::{Language, SCSS};
pub use scanner::{Scanner, scan, scan_str};
pub use sink::{FnSink, KindFilter, TagSink};
pub use source::{IterLines, LineSource, StrLines, trim_line_terminator};
pub use state::{Directive, ScanState};
pub use tag::Tag;
