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

//! Splits pattern text into elements, rejecting stars with nothing to repeat.
//!
//! The grammar is tiny:
//!
//! ```text
//! pattern := element*
//! element := symbol '*'?
//! symbol  := any character except '*'
//! ```
//!
//! Every `*` the grammar does not consume as a repetition marker is an error.

use crate::pattern::{Element, Symbol};
use crate::symbol::{STAR, WILDCARD};
use crate::{PatternError, PatternErrorKind};
use nom::types::CompleteStr;
use nom::{Context, ErrorKind, IResult};
use nom_locate::LocatedSpan;

#[cfg(test)]
mod test;

/// Input type for all the pattern parsers
pub(crate) type Span<'a> = LocatedSpan<CompleteStr<'a>>;

/// Parse a single element: one symbol and an optional trailing star
pub(crate) fn parse_element<'a>(i: Span<'a>) -> IResult<Span<'a>, Element, PatternErrorKind> {
    use nom::Err as NErr;

    let (rest, c) = fix_error!(i, PatternErrorKind, call!(nom::anychar))?;
    let symbol = match c {
        STAR => {
            // The previous element (if any) already took its star, so this
            // one is a stray
            let kind = if i.offset == 0 {
                PatternErrorKind::LeadingStar
            } else {
                PatternErrorKind::RepeatedStar
            };
            return Err(NErr::Failure(Context::Code(i, ErrorKind::Custom(kind))));
        }
        WILDCARD => Symbol::Any,
        literal => Symbol::Literal(literal),
    };

    let (rest, star) = fix_error!(rest, PatternErrorKind, opt!(char!(STAR)))?;

    Ok((
        rest,
        Element {
            symbol,
            repeated: star.is_some(),
        },
    ))
}

/// Parse an entire pattern
pub(crate) fn parse_pattern(source: &str) -> Result<Vec<Element>, PatternError> {
    use nom::Err as NErr;

    let mut i = Span::new(CompleteStr(source));
    let mut elements = Vec::new();

    while !i.fragment.0.is_empty() {
        let (new_i, element) = match parse_element(i) {
            Ok(v) => v,
            Err(NErr::Failure(context)) | Err(NErr::Error(context)) => {
                return Err(error_from_context(context));
            }
            Err(NErr::Incomplete(_)) => {
                return Err(PatternError::new(
                    PatternErrorKind::InternalFailure("incomplete pattern"),
                    i.offset,
                ));
            }
        };

        trace!("Parsed element {:?} at offset {}", element, i.offset);
        elements.push(element);
        i = new_i;
    }

    Ok(elements)
}

/// Flatten a nom error context into the error reported to library consumers
fn error_from_context(context: Context<Span, PatternErrorKind>) -> PatternError {
    let (span, kind) = match context {
        Context::Code(span, kind) => (span, kind),
        Context::List(errors) => match errors.into_iter().next() {
            Some(e) => e,
            None => {
                return PatternError::new(
                    PatternErrorKind::InternalFailure("empty error context"),
                    0,
                );
            }
        },
    };

    let kind = match kind {
        ErrorKind::Custom(kind) => kind,
        other => PatternErrorKind::NomError(nom::error_to_u32(&other)),
    };

    PatternError::new(kind, span.offset)
}
