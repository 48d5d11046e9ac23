use super::{TransformError, UnterminatedFragment};

pub const DECLARATION: &str = "var ";
pub const SEARCH_CREATE: &str = " = search.create";
pub const RESULT_COUNT: &str = "var searchResultCount";
pub const RUN_EACH: &str = ".run().each";
pub const COMMENT_OPEN: &str = "/*";

/// Byte offsets of the first occurrence of each anchor in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchors {
    pub declaration: Option<usize>,
    pub search_create: Option<usize>,
    pub result_count: Option<usize>,
    pub run_each: Option<usize>,
    pub comment: Option<usize>,
}

impl Anchors {
    /// Scan the whole script for every anchor. Each search starts at offset 0.
    pub fn locate(script: &str) -> Self {
        Self {
            declaration: script.find(DECLARATION),
            search_create: script.find(SEARCH_CREATE),
            result_count: script.find(RESULT_COUNT),
            run_each: script.find(RUN_EACH),
            comment: script.find(COMMENT_OPEN),
        }
    }

    /// Text between `var ` and ` = search.create`, trimmed.
    ///
    /// Returns `None` when either anchor is absent or the enclosed text is
    /// blank. The identifier shape is not checked.
    pub fn search_variable<'a>(&self, script: &'a str) -> Option<&'a str> {
        let start = self.declaration? + DECLARATION.len();
        let end = self.search_create?;
        let name = slice(script, start, end).trim();
        (!name.is_empty()).then_some(name)
    }

    /// Offset where the `search.create` fragment stops.
    ///
    /// The result-count declaration terminates the fragment only when the
    /// script also iterates results with `.run().each`; otherwise the first
    /// block comment does. Scripts with neither are resolved by `policy`.
    pub fn fragment_end(
        &self,
        script: &str,
        policy: UnterminatedFragment,
    ) -> Result<usize, TransformError> {
        match (self.result_count, self.run_each) {
            (Some(count), Some(_)) => Ok(count),
            _ => match self.comment {
                Some(comment) => Ok(comment),
                None => policy.resolve(script),
            },
        }
    }
}

/// Substring `start..end`, empty when `end` precedes `start`.
pub fn slice(script: &str, start: usize, end: usize) -> &str {
    if end <= start {
        ""
    } else {
        &script[start..end]
    }
}
