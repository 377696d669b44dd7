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

//! Tests for the pattern parser

use super::*;
use pretty_assertions::assert_eq;

fn create_span(s: &str) -> Span {
    Span::new(CompleteStr(s))
}

fn literal(c: char, repeated: bool) -> Element {
    Element {
        symbol: Symbol::Literal(c),
        repeated,
    }
}

fn any(repeated: bool) -> Element {
    Element {
        symbol: Symbol::Any,
        repeated,
    }
}

#[test]
fn single_element() {
    crate::test::setup();

    let (rest, element) = assert_ok!(parse_element(create_span("ab")));
    assert_eq!(element, literal('a', false));
    assert_eq!(rest.fragment.0, "b");
    assert_eq!(rest.offset, 1);
}

#[test]
fn starred_element() {
    crate::test::setup();

    let (rest, element) = assert_ok!(parse_element(create_span(".*b")));
    assert_eq!(element, any(true));
    assert_eq!(rest.fragment.0, "b");
    assert_eq!(rest.offset, 2);
}

#[test]
fn element_at_end() {
    let (rest, element) = assert_ok!(parse_element(create_span("x*")));
    assert_eq!(element, literal('x', true));
    assert!(rest.fragment.0.is_empty());
}

#[test]
fn empty_pattern() {
    crate::test::setup();

    assert_eq!(assert_ok!(parse_pattern("")), Vec::new());
}

#[test]
fn chained_stars() {
    crate::test::setup();

    assert_eq!(
        assert_ok!(parse_pattern("a*b*c*")),
        vec![literal('a', true), literal('b', true), literal('c', true)]
    );
    assert_eq!(
        assert_ok!(parse_pattern("ab*a*c*a")),
        vec![
            literal('a', false),
            literal('b', true),
            literal('a', true),
            literal('c', true),
            literal('a', false),
        ]
    );
}

#[test]
fn wildcards() {
    assert_eq!(
        assert_ok!(parse_pattern(".*c.")),
        vec![any(true), literal('c', false), any(false)]
    );
}

#[test]
fn leading_star() {
    crate::test::setup();

    let e = assert_err!(parse_pattern("*a"));
    assert_eq!(e.kind(), &PatternErrorKind::LeadingStar);
    assert_eq!(e.offset(), 0);

    let e = assert_err!(parse_pattern("*"));
    assert_eq!(e.kind(), &PatternErrorKind::LeadingStar);
}

#[test]
fn repeated_star() {
    crate::test::setup();

    let e = assert_err!(parse_pattern("a**"));
    assert_eq!(e.kind(), &PatternErrorKind::RepeatedStar);
    assert_eq!(e.offset(), 2);

    let e = assert_err!(parse_pattern("ab*c***"));
    assert_eq!(e.kind(), &PatternErrorKind::RepeatedStar);
    assert_eq!(e.offset(), 5);
}

#[test]
fn offsets_are_bytes() {
    let e = assert_err!(parse_pattern("é**"));
    assert_eq!(e.kind(), &PatternErrorKind::RepeatedStar);
    assert_eq!(e.offset(), 3);

    assert_eq!(
        assert_ok!(parse_pattern("🔥*.")),
        vec![literal('🔥', true), any(false)]
    );
}
