/// Classification of estimation failures.
///
/// Every component collapses its errors to an empty or zero default at its own
/// boundary. The kind is what gets logged, and lets tests assert which degrade
/// path was taken without matching on messages.
///
/// | Kind | Typical cause | Degrades to |
/// |------|---------------|-------------|
/// | `NetworkFailure` | timeout, refused connection, HTTP error | empty quotes, fallback name, no holdings |
/// | `ParseFailure` | short record, non-numeric field, missing payload | skipped record or fallback name |
/// | `NoDataFound` | query succeeded with no usable rows | no holdings, `Unknown` outcome |
/// | `Configuration` | unreadable or malformed proxy table | reported by the caller at startup |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FailureKind {
    /// The external call did not complete.
    NetworkFailure,

    /// A response arrived but its fields were missing or malformed.
    ParseFailure,

    /// The query succeeded but returned nothing usable.
    NoDataFound,

    /// Static configuration could not be loaded.
    Configuration,
}

impl FailureKind {
    /// Short lowercase name, used as a structured log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkFailure => "network",
            Self::ParseFailure => "parse",
            Self::NoDataFound => "no_data",
            Self::Configuration => "config",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
