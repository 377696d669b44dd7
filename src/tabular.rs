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

//! Bottom-up matcher.
//!
//! `table[i][j]` records whether the first `i` input symbols are matched by
//! the first `j` pattern symbols. Row `i + 1` only reads row `i` and the cells
//! to its left in row `i + 1`, so filling rows in increasing order is enough.
//! There is no recursion, so input and pattern length are only bounded by the
//! `(m + 1) * (n + 1)` table.

use crate::symbol::{self, symbol_matches, STAR};

/// Check whether `pattern` matches all of `input`
pub fn matches(input: &str, pattern: &str) -> bool {
    matches_symbols(&symbol::symbols(input), &symbol::symbols(pattern))
}

/// Check whether `pattern` matches all of `input`, over symbol sequences
pub fn matches_symbols(input: &[char], pattern: &[char]) -> bool {
    debug!("Tabular match of {:?} against {:?}", input, pattern);
    let table = fill(input, pattern);
    let verdict = table[input.len()][pattern.len()];
    debug!("Tabular verdict {}", verdict);
    verdict
}

fn fill(input: &[char], pattern: &[char]) -> Vec<Vec<bool>> {
    let (m, n) = (input.len(), pattern.len());
    let mut table = vec![vec![false; n + 1]; m + 1];

    table[0][0] = true;
    // Against empty input, every `x*` group can be skipped, so `a*`, `a*b*`,
    // `a*b*c*` and so on all match
    for j in 1..n {
        if pattern[j] == STAR && table[0][j - 1] {
            table[0][j + 1] = true;
        }
    }

    for i in 0..m {
        for j in 0..n {
            table[i + 1][j + 1] = if symbol_matches(pattern[j], input[i]) {
                table[i][j]
            } else if pattern[j] == STAR {
                // A star in column 0 has no element to repeat
                j >= 1
                    && (table[i + 1][j - 1]
                        || (symbol_matches(pattern[j - 1], input[i]) && table[i][j + 1]))
            } else {
                false
            };
        }
        trace!("row {}: {:?}", i + 1, table[i + 1]);
    }

    table
}
