use crate::{Direction, number};
use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, space1, token};
use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::combinator::{map, map_opt, opt};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{preceded, tuple};
use std::fmt;

/// RTP header extension mapping (`a=extmap`)
///
/// [RFC8285](https://www.rfc-editor.org/rfc/rfc8285.html#section-8)
#[derive(Debug, Clone, PartialEq)]
pub struct ExtMap {
    pub id: u16,

    /// Direction if explicitly given as `<id>/<direction>`
    pub direction: Option<Direction>,

    /// URI identifying the extension
    pub uri: BytesStr,

    /// Extension attributes following the URI
    pub attributes: Vec<BytesStr>,
}

impl ExtMap {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing extmap",
            map(
                tuple((
                    // id
                    number::<u16>,
                    // direction
                    opt(preceded(
                        char('/'),
                        map_opt(take_while1(|c: char| c.is_ascii_alphabetic()), |name| {
                            Direction::from_name(name)
                        }),
                    )),
                    // uri
                    preceded(space1, token),
                    // attributes
                    many0(preceded(
                        space1,
                        map(token, |attr| BytesStr::from_parse(src, attr)),
                    )),
                )),
                |(id, direction, uri, attributes)| Self {
                    id,
                    direction,
                    uri: BytesStr::from_parse(src, uri),
                    attributes,
                },
            ),
        )(i)
    }
}

impl fmt::Display for ExtMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)?;

        if let Some(direction) = self.direction {
            write!(f, "/{direction}")?;
        }

        write!(f, " {}", self.uri)?;

        for attribute in &self.attributes {
            write!(f, " {attribute}")?;
        }

        Ok(())
    }
}
