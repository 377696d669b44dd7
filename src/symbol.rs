/* Dotstar, a full-match pattern engine
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

//! The pattern metacharacters and how a single pattern symbol is compared
//! against a single input symbol

/// Matches any single input symbol
pub const WILDCARD: char = '.';

/// Repeats the preceding pattern element zero or more times
pub const STAR: char = '*';

/// Does one pattern symbol accept one input symbol?
///
/// The wildcard accepts anything. A star is never compared literally, even
/// against a `*` in the input: it only ever acts as a repetition marker.
#[inline]
pub fn symbol_matches(pattern_symbol: char, input_symbol: char) -> bool {
    match pattern_symbol {
        WILDCARD => true,
        STAR => false,
        literal => literal == input_symbol,
    }
}

/// Split a string into the symbol sequence the matchers operate on
#[inline]
pub(crate) fn symbols(s: &str) -> Vec<char> {
    s.chars().collect()
}
