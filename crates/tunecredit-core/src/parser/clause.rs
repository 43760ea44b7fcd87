//! # Clause Scanner
//!
//! Finds the top-level bracketed clauses of a title: `(...)`, `[...]` and
//! `{...}`. Nested brackets belong to the clause that encloses them.

/// Bracket family of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Round,
    Square,
    Curly,
}

impl Bracket {
    fn from_open(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Round),
            '[' => Some(Self::Square),
            '{' => Some(Self::Curly),
            _ => None,
        }
    }

    fn close(self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }
}

/// A bracketed clause with its byte span in the scanned string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause<'a> {
    /// Bracket family of the outermost pair.
    pub bracket: Bracket,
    /// Byte offset of the opening bracket.
    pub start: usize,
    /// Byte offset just past the closing bracket.
    pub end: usize,
    /// Text between the brackets, untrimmed.
    pub inner: &'a str,
    /// Clause index in source order.
    pub index: usize,
}

impl<'a> Clause<'a> {
    /// Byte range covering the clause including its brackets.
    #[must_use]
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Clause text with wrapping brackets peeled, as in `[(Remix)]`.
    #[must_use]
    pub fn content(&self) -> &'a str {
        strip_enclosing(self.inner)
    }

    /// Returns `true` if `pos` falls inside the clause.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        (self.start..self.end).contains(&pos)
    }
}

/// Scans `input` for top-level bracketed clauses, in source order.
///
/// An opener that is never closed is treated as plain text, so clauses
/// nested inside it surface at the top level: `"Song ( (Remix)"` still
/// yields `(Remix)`. Stray or mismatched closers are ignored. Runs in a
/// single pass.
///
/// # Examples
/// ```
/// use tunecredit_core::parser::clause::scan_clauses;
///
/// let clauses = scan_clauses("Epic Tune (feat. Guest) [Live Version]");
/// let inner: Vec<_> = clauses.iter().map(|c| c.inner).collect();
/// assert_eq!(inner, ["feat. Guest", "Live Version"]);
/// ```
#[must_use]
pub fn scan_clauses(input: &str) -> Vec<Clause<'_>> {
    // Open frames: (opener id, byte offset, bracket).
    let mut stack: Vec<(usize, usize, Bracket)> = Vec::new();
    let mut closed: Vec<bool> = Vec::new();
    // Completed pairs: (start, end, bracket, id of the enclosing opener).
    let mut pairs: Vec<(usize, usize, Bracket, Option<usize>)> = Vec::new();

    for (idx, c) in input.char_indices() {
        if let Some(b) = Bracket::from_open(c) {
            stack.push((closed.len(), idx, b));
            closed.push(false);
        } else if let Some(&(id, start, b)) = stack.last() {
            if b.close() == c {
                stack.pop();
                closed[id] = true;
                let parent = stack.last().map(|&(parent, _, _)| parent);
                pairs.push((start, idx + c.len_utf8(), b, parent));
            }
        }
    }

    // An unclosed opener stays on the stack above all of its ancestors, so
    // a pair is top-level exactly when its direct parent never closed.
    let mut top: Vec<_> = pairs
        .into_iter()
        .filter(|&(_, _, _, parent)| parent.is_none_or(|id| !closed[id]))
        .collect();
    top.sort_unstable_by_key(|&(start, ..)| start);

    top.into_iter()
        .enumerate()
        .map(|(index, (start, end, bracket, _))| Clause {
            bracket,
            start,
            end,
            // Brackets are single-byte ASCII.
            inner: &input[start + 1..end - 1],
            index,
        })
        .collect()
}

/// Peels brackets that wrap the whole of `inner`, so `"(Remix)"` and
/// `" [(Remix)] "` both read as `"Remix"`. The result is trimmed.
#[must_use]
pub fn strip_enclosing(inner: &str) -> &str {
    let text = inner.trim();
    let bytes = text.as_bytes();
    if bytes.is_empty() || Bracket::from_open(bytes[0] as char).is_none() {
        return text;
    }

    // Closing offset for each opener that pairs up.
    let mut partner: Vec<Option<usize>> = vec![None; bytes.len()];
    let mut stack: Vec<(usize, Bracket)> = Vec::new();
    for (idx, &byte) in bytes.iter().enumerate() {
        let c = byte as char;
        if let Some(b) = Bracket::from_open(c) {
            stack.push((idx, b));
        } else if let Some(&(open, b)) = stack.last() {
            if b.close() == c {
                stack.pop();
                partner[open] = Some(idx);
            }
        }
    }

    let (mut lo, mut hi) = (0, bytes.len());
    while lo < hi && partner[lo] == Some(hi - 1) {
        lo += 1;
        hi -= 1;
        while lo < hi && bytes[lo].is_ascii_whitespace() {
            lo += 1;
        }
        while lo < hi && bytes[hi - 1].is_ascii_whitespace() {
            hi -= 1;
        }
    }
    &text[lo..hi]
}

/// Removes the given byte spans from `input`, leaving a space in place of
/// each so neighbouring words never fuse.
#[must_use]
pub fn remove_spans(input: &str, spans: &[(usize, usize)]) -> String {
    let mut sorted = spans.to_vec();
    sorted.sort_unstable();

    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    for (start, end) in sorted {
        if start < cursor {
            continue;
        }
        out.push_str(&input[cursor..start]);
        out.push(' ');
        cursor = end;
    }
    out.push_str(&input[cursor..]);
    out
}

/// Separators that may dangle at either end of a title once clauses are cut.
const DANGLING_SEPARATORS: &[char] = &['-', '–', '—', '|', ':'];

/// Collapses whitespace and trims. With `trim_separators`, dangling
/// separators at both ends are dropped as well.
#[must_use]
pub fn tidy(input: &str, trim_separators: bool) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if !trim_separators {
        return collapsed;
    }
    collapsed
        .trim_matches(|c: char| c.is_whitespace() || DANGLING_SEPARATORS.contains(&c))
        .to_string()
}
