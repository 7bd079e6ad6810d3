//! Upper/lower case mapping.

/// Direction of a case transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseMode {
    /// Map every character to upper case.
    #[default]
    Upper,
    /// Map every character to lower case.
    Lower,
}

impl From<bool> for CaseMode {
    /// `true` selects [`CaseMode::Upper`], `false` selects [`CaseMode::Lower`].
    fn from(to_upper: bool) -> Self {
        if to_upper {
            CaseMode::Upper
        } else {
            CaseMode::Lower
        }
    }
}

/// Returns `input` with every character mapped according to `mode`.
///
/// Mapping is locale-independent. Non-ASCII characters follow the Unicode
/// case tables, so a few characters may expand (`'ß'` upper-cases to `"SS"`).
///
/// # Examples
///
/// ```
/// use u_basics::text::{transform_case, CaseMode};
///
/// assert_eq!(transform_case("Hello", CaseMode::Upper), "HELLO");
/// assert_eq!(transform_case("Hello", CaseMode::Lower), "hello");
/// assert_eq!(transform_case("Hello", CaseMode::default()), "HELLO");
/// ```
pub fn transform_case(input: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Upper => input.to_uppercase(),
        CaseMode::Lower => input.to_lowercase(),
    }
}

/// Shorthand for [`transform_case`] with [`CaseMode::Upper`].
pub fn to_upper(input: &str) -> String {
    transform_case(input, CaseMode::Upper)
}

/// Shorthand for [`transform_case`] with [`CaseMode::Lower`].
pub fn to_lower(input: &str) -> String {
    transform_case(input, CaseMode::Lower)
}
