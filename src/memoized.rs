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

//! Top-down matcher.
//!
//! A match state `(i, j)` asks "does `input[i..]` match `pattern[j..]`?". The
//! verdict for a state only depends on states with a larger `i` or a larger
//! `j`, so plain recursion terminates. Every verdict is cached for the rest of
//! the call, which keeps the work at one evaluation per state instead of the
//! exponential blowup of naive backtracking over `x*` groups.
//!
//! The call depth is bounded by `input.len() + pattern.len()`. For very long
//! inputs prefer [`crate::tabular`].

use crate::symbol::{self, symbol_matches, STAR};
use crate::types::{Map, State};

/// Check whether `pattern` matches all of `input`
pub fn matches(input: &str, pattern: &str) -> bool {
    matches_symbols(&symbol::symbols(input), &symbol::symbols(pattern))
}

/// Check whether `pattern` matches all of `input`, over symbol sequences
pub fn matches_symbols(input: &[char], pattern: &[char]) -> bool {
    debug!("Memoized match of {:?} against {:?}", input, pattern);
    let mut solver = Solver::new(input, pattern);
    let verdict = solver.solve(0, 0);
    debug!(
        "Memoized verdict {} after evaluating {} states",
        verdict,
        solver.memo.len()
    );
    verdict
}

/// Everything a single top-level call needs. Owned by that call and dropped
/// with it; nothing is shared between calls.
struct Solver<'a> {
    input: &'a [char],
    pattern: &'a [char],
    memo: Map<State, bool>,
}

impl<'a> Solver<'a> {
    fn new(input: &'a [char], pattern: &'a [char]) -> Solver<'a> {
        Solver {
            input,
            pattern,
            memo: Map::default(),
        }
    }

    fn solve(&mut self, i: usize, j: usize) -> bool {
        if let Some(&verdict) = self.memo.get(&(i, j)) {
            trace!("memo hit ({}, {}) -> {}", i, j, verdict);
            return verdict;
        }

        let verdict = if j == self.pattern.len() {
            i == self.input.len()
        } else {
            let first_match =
                i < self.input.len() && symbol_matches(self.pattern[j], self.input[i]);

            // Only ever look ahead. There is no `pattern[j - 1]` access, so a
            // leading `*` needs no guard: it is just a symbol nothing matches.
            if self.pattern.get(j + 1) == Some(&STAR) {
                self.solve(i, j + 2) || (first_match && self.solve(i + 1, j))
            } else {
                first_match && self.solve(i + 1, j + 1)
            }
        };

        self.memo.insert((i, j), verdict);
        verdict
    }
}
