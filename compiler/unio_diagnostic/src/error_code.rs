//! Error codes for analysis diagnostics.
//!
//! Each code is a unique identifier (e.g., `E3002`) used for documentation
//! lookups through [`ErrorDocs`](crate::ErrorDocs).

use std::fmt;

/// Error codes for all analysis diagnostics.
///
/// Format: E#### for errors, W#### for advisory codes:
/// - E3xxx: Union membership and pattern analysis errors
/// - W3xxx: Advisory notes from the pattern analysis
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Pattern shape the analysis cannot model
    E3001,
    /// Type is not a member of the declared union
    E3002,
    /// Case set does not touch every required union member
    E3003,
    /// Patterns for a union member are not exhaustive
    E3004,
    /// Declared sub-union is not contained in the handle's union
    E3006,
    /// Exhaustiveness could not be verified (recursive type limit)
    W3005,
    /// Error limit reached
    E9002,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        ErrorCode::E3006,
        ErrorCode::W3005,
        ErrorCode::E9002,
    ];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3006 => "E3006",
            ErrorCode::W3005 => "W3005",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Check if this is a pattern/union analysis code (E3xxx / W3xxx range).
    pub fn is_pattern_error(&self) -> bool {
        !self.is_internal_error()
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9002)
    }

    /// Check if this is a warning/advisory code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W3005)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E3002"` or `"w3005"` (case-insensitive).
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
