//! Classification of source lines and splicing of the quoted version text.

use std::ops::Range;

/// How a line of the target file is treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLine<'a> {
    /// No marker on the line; emitted unchanged.
    PassThrough(&'a str),
    /// Contains a marker; the version sits between the first two quotes.
    Declaration(Declaration<'a>),
}

/// A version-declaration line split around its quoted version text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub text: &'a str,
    pub marker: &'a str,
    /// Byte range of the text between the first and second quote, if the
    /// line has at least two quotes.
    pub quoted: Option<Range<usize>>,
}

impl<'a> SourceLine<'a> {
    /// Classify `text` against the marker substrings.
    ///
    /// The first marker found on the line is reported.
    pub fn classify<S: AsRef<str>>(text: &'a str, markers: &'a [S]) -> Self {
        match markers
            .iter()
            .map(|marker| marker.as_ref())
            .find(|marker: &&str| text.contains(*marker))
        {
            Some(marker) => SourceLine::Declaration(Declaration {
                text,
                marker,
                quoted: quoted_range(text),
            }),
            None => SourceLine::PassThrough(text),
        }
    }
}

impl<'a> Declaration<'a> {
    /// The text between the first and second quote.
    pub fn version_text(&self) -> Option<&'a str> {
        self.quoted.clone().map(|range| &self.text[range])
    }

    /// Rebuild the line with the quoted text replaced by `version`.
    ///
    /// Returns `None` when the line has no quoted segment.
    pub fn replace_version(&self, version: &str) -> Option<String> {
        let range = self.quoted.clone()?;
        let mut line = String::with_capacity(self.text.len() + version.len());
        line.push_str(&self.text[..range.start]);
        line.push_str(version);
        line.push_str(&self.text[range.end..]);
        Some(line)
    }
}

fn quoted_range(text: &str) -> Option<Range<usize>> {
    let open = text.find('"')? + 1;
    let close = open + text[open..].find('"')?;
    Some(open..close)
}
