//! Input normalization for the query form.
//!
//! Raw field values come in as strings and booleans exactly as the host
//! document reports them. This module turns them into a validated
//! [`RecommendationRequest`]:
//!
//! - the query must be non-empty after trimming
//! - the limit is coerced into `1..=10` and never blocks submission
//! - filter flags are taken as-is

use crate::error::{Result, ValidationError};
use crate::types::RecommendationRequest;

/// A non-empty, trimmed hiring-requirement query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trim `raw` and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Maximum number of assessments to request and display.
///
/// Always within `1..=RequestLimit::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestLimit(u32);

impl RequestLimit {
    /// Upper bound enforced on the client regardless of what the server allows
    pub const MAX: u32 = 10;

    /// Used when the raw value is missing, unparseable or not positive
    pub const DEFAULT: u32 = 10;

    /// Parse the raw limit text. Never fails.
    ///
    /// Parsing reads an optional sign followed by the leading run of digits,
    /// so `"7 items"` is 7 and `"7.9"` is 7. No digits at all, or a value
    /// of zero or below, gives the default; anything above the cap is clamped.
    pub fn parse(raw: &str) -> Self {
        match parse_leading_int(raw) {
            Some(n) if n > 0 => Self(n.min(i64::from(Self::MAX)) as u32),
            _ => Self(Self::DEFAULT),
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for RequestLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Checkbox preferences captured at submission time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterFlags {
    pub prefer_remote: bool,
    pub prefer_adaptive: bool,
}

impl FilterFlags {
    pub fn new(prefer_remote: bool, prefer_adaptive: bool) -> Self {
        Self {
            prefer_remote,
            prefer_adaptive,
        }
    }
}

/// Raw form field values, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub query: String,
    pub limit: String,
    pub prefer_remote: bool,
    pub prefer_adaptive: bool,
}

impl FormInput {
    /// Validate the query and coerce the rest into a request body.
    pub fn normalize(&self) -> Result<RecommendationRequest> {
        let query = Query::parse(&self.query)?;
        let limit = RequestLimit::parse(&self.limit);
        let flags = FilterFlags::new(self.prefer_remote, self.prefer_adaptive);
        Ok(RecommendationRequest::new(query, limit, flags))
    }
}

/// Read an optionally signed base-10 integer prefix, ignoring surrounding
/// whitespace and any trailing characters. Saturates instead of overflowing.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let run: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if run.is_empty() {
        return None;
    }

    let magnitude = run.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
