use regex::Regex;

/// A compiled predicate over strings, built by alternating rule fragments.
///
/// An empty rule list compiles to `Never` rather than an empty alternation,
/// which would match everything.
#[derive(Debug, Clone)]
pub enum Matcher {
    Never,
    Pattern(Regex),
}

impl Matcher {
    pub fn never() -> Self {
        Matcher::Never
    }

    /// Joins the fragments into one alternation. A malformed fragment fails
    /// the whole source; the caller decides whether to skip it for the pass.
    pub fn compile(patterns: &[String]) -> Result<Self, regex::Error> {
        if patterns.is_empty() {
            return Ok(Matcher::Never);
        }
        Ok(Matcher::Pattern(Regex::new(&patterns.join("|"))?))
    }

    pub fn test(&self, input: &str) -> bool {
        match self {
            Matcher::Never => false,
            Matcher::Pattern(regex) => regex.is_match(input),
        }
    }
}
