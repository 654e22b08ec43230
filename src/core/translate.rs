//! Inner marker translation for nested block comments.
//!
//! A markup comment cannot contain another markup comment: the first inner `-->`
//! would close the outer one. Before a markup block is nested, inner markup markers
//! are rewritten to code-slash block markers, and rewritten back when the nesting
//! is removed.

/// Token-level rewrite between two marker families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerTranslator {
    pub outer_open: &'static str,
    pub outer_close: &'static str,
    pub inner_open: &'static str,
    pub inner_close: &'static str,
}

/// `<!--` / `-->` <-> `/*` / `*/`
pub const MARKUP_TO_SLASH: MarkerTranslator = MarkerTranslator {
    outer_open: "<!--",
    outer_close: "-->",
    inner_open: "/*",
    inner_close: "*/",
};

impl MarkerTranslator {
    /// Replace outer-family markers with inner-family markers.
    ///
    /// Each line is scanned left to right. Paired markers are converted, and so
    /// are dangling ones whose partner sits on another line of a multi-line
    /// comment. Whitespace around the markers is left as is.
    pub fn translate_outward(&self, text: &str) -> String {
        map_lines(text, |line| {
            rewrite_tokens(
                line,
                (self.outer_open, self.inner_open),
                (self.outer_close, self.inner_close),
            )
        })
    }

    /// Exact inverse of [`translate_outward`](Self::translate_outward).
    pub fn translate_inward(&self, text: &str) -> String {
        map_lines(text, |line| {
            rewrite_tokens(
                line,
                (self.inner_open, self.outer_open),
                (self.inner_close, self.outer_close),
            )
        })
    }
}

/// `<!-- … -->` becomes `/* … */`.
pub fn translate_outward(text: &str) -> String {
    MARKUP_TO_SLASH.translate_outward(text)
}

/// `/* … */` becomes `<!-- … -->`.
pub fn translate_inward(text: &str) -> String {
    MARKUP_TO_SLASH.translate_inward(text)
}

fn map_lines(text: &str, f: impl Fn(&str) -> String) -> String {
    text.split('\n').map(f).collect::<Vec<_>>().join("\n")
}

/// Replace non-overlapping occurrences of two tokens in a single pass.
///
/// At each position the opening token is tried before the closing one, so
/// `<!-->` reads as an opener followed by `>`.
fn rewrite_tokens(line: &str, open: (&str, &str), close: (&str, &str)) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix(open.0) {
            out.push_str(open.1);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(close.0) {
            out.push_str(close.1);
            rest = after;
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}
