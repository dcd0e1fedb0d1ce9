//! Long-form explanations of the analysis error codes.
//!
//! One markdown file per code, embedded at compile time. Each file opens with
//! `# <code>: <title>`.

use crate::ErrorCode;

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::E3001, include_str!("E3001.md")),
    (ErrorCode::E3002, include_str!("E3002.md")),
    (ErrorCode::E3003, include_str!("E3003.md")),
    (ErrorCode::E3004, include_str!("E3004.md")),
    (ErrorCode::W3005, include_str!("W3005.md")),
    (ErrorCode::E3006, include_str!("E3006.md")),
];

/// Lookup of the embedded explanations.
pub struct ErrorDocs;

impl ErrorDocs {
    /// The full markdown explanation of `code`.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter()
            .find_map(|&(documented, doc)| (documented == code).then_some(doc))
    }

    /// The one-line title from the explanation's heading.
    pub fn title(code: ErrorCode) -> Option<&'static str> {
        let heading = Self::get(code)?.lines().next()?;
        heading
            .strip_prefix("# ")?
            .split_once(": ")
            .map(|(_, title)| title.trim())
    }

    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|&(code, _)| code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        Self::get(code).is_some()
    }
}

#[cfg(test)]
mod tests;
