use regex::Regex;

use crate::error::Result;

/// A feature clause written without brackets, located in a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BareFeature<'a> {
    /// Byte range of the whole clause, keyword included.
    pub span: (usize, usize),
    /// The names following the keyword.
    pub body: &'a str,
}

/// Extracts featured-artist credits introduced by "feat.", "ft." or
/// "featuring", and optionally collaboration credits introduced by "with".
pub struct CreditExtractor {
    re_clause: Regex,
    re_bare: Regex,
    re_with: Regex,
    re_dash_with: Regex,
    re_and: Regex,
}

impl CreditExtractor {
    /// Constructs a new `CreditExtractor` with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `CreditError::Regex` if any pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_clause: Regex::new(
                r"(?is)^\s*(?:featuring\b|feat\.|ft\.|feat\b|ft\b)\s*[:\-]?\s*([^\s.:\-].*?)\s*$",
            )?,
            re_bare: Regex::new(
                r"(?i)(?:\s+-)?\s+(?:featuring\s+|feat\.\s*|ft\.\s*|feat\s+|ft\s+)(?:[:\-]\s*)?([^()\[\]{}]*[^()\[\]{}\s])",
            )?,
            re_with: Regex::new(r"(?is)^\s*with\s+(\S.*?)\s*$")?,
            re_dash_with: Regex::new(r"(?i)\s+[-–—]\s+with\s+([^()\[\]{}]*[^()\[\]{}\s])")?,
            // Lowercase only, so a name like "And Friends" survives.
            re_and: Regex::new(r"^and\s+|\s+and\s+")?,
        })
    }

    /// Returns the names part of a bracketed clause if it is a feature clause.
    #[must_use]
    pub fn clause_body<'a>(&self, inner: &'a str) -> Option<&'a str> {
        self.re_clause
            .captures(inner)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// Returns the names part of a bracketed `"with ..."` collaboration clause.
    #[must_use]
    pub fn with_body<'a>(&self, inner: &'a str) -> Option<&'a str> {
        self.re_with
            .captures(inner)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// Finds a dash-led collaboration clause, as in `"Song - with Guest"`.
    ///
    /// The clause runs up to the next bracket or the end. A bare "with"
    /// inside a title ("Sleep With The Light On") never matches.
    #[must_use]
    pub fn dash_with_clause<'a>(&self, title: &'a str) -> Option<BareFeature<'a>> {
        let caps = self.re_dash_with.captures(title)?;
        let whole = caps.get(0)?;
        let body = caps.get(1)?;
        Some(BareFeature {
            span: (whole.start(), whole.end()),
            body: body.as_str(),
        })
    }

    /// Finds the first unbracketed feature clause, as in `"Song ft. Guest"`.
    ///
    /// The clause runs up to the next bracket, the next `" - "`, or the end.
    #[must_use]
    pub fn bare_clause<'a>(&self, title: &'a str) -> Option<BareFeature<'a>> {
        let caps = self.re_bare.captures(title)?;
        let whole = caps.get(0)?;
        let body = caps.get(1)?;

        let cut = body.as_str().find(" - ").unwrap_or(body.as_str().len());
        let names = body.as_str()[..cut].trim_end();
        if names.is_empty() {
            return None;
        }

        let end = if cut == body.as_str().len() {
            whole.end()
        } else {
            body.start() + cut
        };
        Some(BareFeature {
            span: (whole.start(), end),
            body: names,
        })
    }

    /// Splits a feature body into individual names.
    ///
    /// Names are separated by `,` and `&`. A lowercase "and" only separates
    /// the last name of a comma list ("A, B and C", "A, B, and C");
    /// elsewhere it is part of a name.
    #[must_use]
    pub fn split_names(&self, body: &str) -> Vec<String> {
        let mut names: Vec<&str> = body
            .split([',', '&'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if body.contains(',') {
            if let Some(last) = names.pop() {
                names.extend(
                    self.re_and
                        .split(last)
                        .map(str::trim)
                        .filter(|s| !s.is_empty()),
                );
            }
        }

        names.into_iter().map(String::from).collect()
    }
}
