/* Dotstar's main file
Copyright (C) 2018 Reed Koser

Dotstar is free software; you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation; either version 3 of the License, or (at your option) any later
version.

Dotstar is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE.  See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
this program.  If not, see <http://www.gnu.org/licenses/>.  */

//! Dotstar decides whether an input sequence is fully matched by a pattern
//! built from literal symbols, `.` (any single symbol) and `*` (zero or more
//! of the preceding element).
//!
//! Symbols are Unicode scalar values: `"🔥"` is one symbol, not four bytes.
//! The whole input has to be accounted for by the pattern; there is no
//! substring search.
//!
//! Two independent decision procedures are provided:
//!
//!  * [`memoized`], a top-down recursion over `(input offset, pattern offset)`
//!    states with a call-scoped cache
//!  * [`tabular`], a bottom-up table over the same states with no recursion
//!
//! ```
//! assert!(dotstar::matches("aab", "c*a*b"));
//! assert!(!dotstar::matches("ab", ".*c"));
//! ```
#![warn(missing_docs)]

extern crate fxhash;
#[macro_use]
extern crate log;
#[macro_use]
extern crate nom;


#[cfg(test)]
mod arbitrary;
pub mod memoized;
mod parsers;
pub mod pattern;
pub mod symbol;
pub mod tabular;
mod types;

pub use crate::pattern::{Pattern, PatternEngine};

use failure::Fail;
use std::fmt;

/// Which decision procedure to run a match with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Top-down recursion with a per-call cache. Call depth grows with
    /// `input.len() + pattern.len()`.
    Memoized,
    /// Bottom-up table fill. No recursion, so it is safe for arbitrarily long
    /// inputs and patterns.
    Tabular,
}

impl Default for Strategy {
    fn default() -> Strategy {
        Strategy::Tabular
    }
}

impl Strategy {
    /// Check whether `pattern` matches all of `input` using this strategy
    #[inline]
    pub fn matches(self, input: &str, pattern: &str) -> bool {
        match self {
            Strategy::Memoized => memoized::matches(input, pattern),
            Strategy::Tabular => tabular::matches(input, pattern),
        }
    }

    /// Same as [`Strategy::matches`], over already-split symbol sequences
    #[inline]
    pub fn matches_symbols(self, input: &[char], pattern: &[char]) -> bool {
        match self {
            Strategy::Memoized => memoized::matches_symbols(input, pattern),
            Strategy::Tabular => tabular::matches_symbols(input, pattern),
        }
    }
}

/// Check whether `pattern` matches all of `input`.
///
/// This uses the [`Strategy::Tabular`] procedure. Malformed patterns (a
/// leading `*`, or `**`) are not rejected; they simply produce a verdict. Use
/// [`Pattern::parse`] to reject them up front.
pub fn matches(input: &str, pattern: &str) -> bool {
    Strategy::default().matches(input, pattern)
}

/// What sort of thing is wrong with a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternErrorKind {
    /// The pattern starts with a `*`, so there is nothing for it to repeat
    LeadingStar,

    /// A `*` directly follows another `*`
    RepeatedStar,

    /// This variant should never surface in library consumer code in practice,
    /// but we need it to make nom types work out
    NomError(u32),

    /// Another internal variant. Should never be returned to the library consumer
    InternalFailure(&'static str),
}

impl From<u32> for PatternErrorKind {
    fn from(other: u32) -> PatternErrorKind {
        PatternErrorKind::NomError(other)
    }
}

/// A pattern was rejected by [`Pattern::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternError {
    kind: PatternErrorKind,
    offset: usize,
}

impl PatternError {
    pub(crate) fn new(kind: PatternErrorKind, offset: usize) -> PatternError {
        PatternError { kind, offset }
    }

    /// What went wrong
    pub fn kind(&self) -> &PatternErrorKind {
        &self.kind
    }

    /// Byte offset into the pattern source where the problem was found
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self.kind {
            PatternErrorKind::LeadingStar => write!(
                f,
                "`*` at offset {} has no preceding element to repeat",
                self.offset
            ),
            PatternErrorKind::RepeatedStar => {
                write!(f, "`*` at offset {} follows another `*`", self.offset)
            }
            PatternErrorKind::NomError(code) => write!(
                f,
                "internal parser error {} at offset {}",
                code, self.offset
            ),
            PatternErrorKind::InternalFailure(what) => {
                write!(f, "internal failure at offset {}: {}", self.offset, what)
            }
        }
    }
}

impl Fail for PatternError {}
