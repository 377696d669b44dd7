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

//! Various proptest generators

use crate::symbol::{STAR, WILDCARD};
use proptest::prelude::*;

/// Input symbols. Kept to a small alphabet so generated patterns actually
/// match now and then.
pub fn input_string(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just('a'), Just('b'), Just('c')], 0..max_len)
        .prop_map(|symbols| symbols.into_iter().collect::<String>())
}

/// A pattern symbol: one of the input literals, or the wildcard
fn pattern_symbol() -> impl Strategy<Value = char> {
    prop_oneof![Just('a'), Just('b'), Just('c'), Just(WILDCARD)]
}

/// Patterns where every `*` follows exactly one literal or wildcard
pub fn well_formed_pattern(max_elements: usize) -> impl Strategy<Value = String> {
    prop::collection::vec((pattern_symbol(), any::<bool>()), 0..max_elements).prop_map(
        |elements| {
            let mut pattern = String::new();
            for (symbol, repeated) in elements {
                pattern.push(symbol);
                if repeated {
                    pattern.push(STAR);
                }
            }
            pattern
        },
    )
}

/// Any string over the pattern alphabet, including stray stars
pub fn raw_pattern(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![pattern_symbol(), Just(STAR)], 0..max_len)
        .prop_map(|symbols| symbols.into_iter().collect::<String>())
}
