//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::Rgb(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns this error kind as [`Any`], so that callers can downcast to the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns the start of the first span of this error, which is the position reported to the
    /// user.
    pub fn position(&self) -> usize {
        self.spans.first().map_or(0, |span| span.start)
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error into a [`String`], using `input` as the source code the
    /// spans point into.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> String {
        let mut buf = Vec::new();

        // writing into a `Vec<u8>` does not fail
        let _ = self.build_report(src_id).write((src_id, Source::from(input)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use cas_attrs::ErrorKind;
    use super::*;

    /// Used only to exercise the derive macro from within this crate.
    mod cas_error {
        pub use crate::*;
    }

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("unexpected character `{}`", character),
        labels = ["this character"],
        help = "remove it",
    )]
    struct Unexpected {
        character: char,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "nothing left", labels = [""])]
    struct Empty;

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![3..4], Unexpected { character: '$' });
        assert!(err.is::<Unexpected>());
        assert!(!err.is::<Empty>());
        assert_eq!(err.downcast_ref::<Unexpected>().map(|k| k.character), Some('$'));
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn report_contains_message_and_help() {
        let input = "1 + $";
        let err = Error::new(vec![4..5], Unexpected { character: '$' });
        let report = err.report_to_string("input", input);
        let report = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();
        assert!(report.contains("unexpected character `$`"));
        assert!(report.contains("this character"));
        assert!(report.contains("remove it"));
    }
}
