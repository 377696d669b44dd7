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

//! Validated patterns, and the "pattern engine" which maps queries onto the
//! values registered under every pattern they match

use crate::parsers;
use crate::symbol::{self, STAR, WILDCARD};
use crate::{PatternError, Strategy};
use std::fmt;

/// A single pattern symbol, before any repetition is applied
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Matches exactly this input symbol
    Literal(char),
    /// `.`, matches any single input symbol
    Any,
}

impl Symbol {
    /// Does this symbol accept the given input symbol?
    pub fn accepts(self, input_symbol: char) -> bool {
        match self {
            Symbol::Literal(c) => c == input_symbol,
            Symbol::Any => true,
        }
    }
}

/// One unit of a validated pattern: a symbol, optionally followed by `*`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Element {
    /// What to match
    pub symbol: Symbol,
    /// Is this element followed by a `*`?
    pub repeated: bool,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self.symbol {
            Symbol::Literal(c) => write!(f, "{}", c)?,
            Symbol::Any => write!(f, "{}", WILDCARD)?,
        }
        if self.repeated {
            write!(f, "{}", STAR)?;
        }
        Ok(())
    }
}

/// A pattern which has been checked for stars with nothing to repeat.
///
/// Both matchers are guaranteed to agree on validated patterns, so the choice
/// of [`Strategy`] only affects resource use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    symbols: Vec<char>,
    elements: Vec<Element>,
}

impl Pattern {
    /// Parse and validate a pattern
    pub fn parse(source: &str) -> Result<Pattern, PatternError> {
        let elements = parsers::parse_pattern(source)?;
        debug!("Parsed pattern {:?} into {} elements", source, elements.len());
        Ok(Pattern {
            source: source.into(),
            symbols: symbol::symbols(source),
            elements,
        })
    }

    /// The text this pattern was parsed from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The elements making up this pattern, in order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Check whether this pattern matches all of `input`
    pub fn matches(&self, input: &str) -> bool {
        self.matches_with(input, Strategy::default())
    }

    /// Check whether this pattern matches all of `input`, using a specific
    /// strategy
    pub fn matches_with(&self, input: &str, strategy: Strategy) -> bool {
        strategy.matches_symbols(&symbol::symbols(input), &self.symbols)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.source)
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Pattern, PatternError> {
        Pattern::parse(s)
    }
}

/// A matcher for queries against an ordered list of patterns
#[derive(Clone, Default, Debug)]
pub struct PatternEngine<T> {
    patterns: Vec<Pattern>,
    mappings: Vec<T>,
    strategy: Strategy,
}

impl<T> PatternEngine<T> {
    /// Create an empty engine that matches with the given strategy
    pub fn with_strategy(strategy: Strategy) -> PatternEngine<T> {
        PatternEngine {
            patterns: Vec::new(),
            mappings: Vec::new(),
            strategy,
        }
    }

    /// Register `value` under `pattern`. The pattern is validated first;
    /// nothing is registered if it is malformed.
    pub fn add(&mut self, pattern: &str, value: T) -> Result<(), PatternError> {
        let pattern = Pattern::parse(pattern)?;
        self.add_pattern(pattern, value);
        Ok(())
    }

    /// Register `value` under an already-validated pattern
    pub fn add_pattern(&mut self, pattern: Pattern, value: T) {
        debug!("Registering pattern {:?}", pattern.as_str());
        self.patterns.push(pattern);
        self.mappings.push(value);
    }

    /// Get the list of values associated with the patterns matching the
    /// provided query, in registration order
    pub fn matches(&self, query: &str) -> Vec<&T> {
        debug!("Attempting pattern search on {:?}", query);
        let query = symbol::symbols(query);
        self.patterns
            .iter()
            .zip(self.mappings.iter())
            .filter(|(pattern, _)| self.strategy.matches_symbols(&query, &pattern.symbols))
            .map(|(_, value)| value)
            .collect()
    }

    /// Get the value of the first registered pattern matching the query
    pub fn first_match(&self, query: &str) -> Option<&T> {
        let query = symbol::symbols(query);
        self.patterns
            .iter()
            .position(|pattern| self.strategy.matches_symbols(&query, &pattern.symbols))
            .map(|index| &self.mappings[index])
    }

    /// The strategy queries are matched with
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Iterate over the registered patterns
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// How many patterns are registered
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Are there no registered patterns?
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
