/// Outcome of visiting a single article URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleState {
    /// Title and content were extracted and a document was recorded
    Collected,

    /// The article page could not be fetched
    FetchFailed,

    /// The page was fetched but nothing could be extracted from it
    Empty,

    /// A title or content was extracted, but not both
    Incomplete,

    /// The URL already appeared earlier on the same listing page
    Duplicate,
}

impl ArticleState {
    /// Returns true if a document was recorded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Collected)
    }

    /// Short label used in log lines and statistics
    pub fn label(&self) -> &'static str {
        match self {
            Self::Collected => "collected",
            Self::FetchFailed => "fetch_failed",
            Self::Empty => "empty",
            Self::Incomplete => "incomplete",
            Self::Duplicate => "duplicate",
        }
    }
}
