use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, space1, token};
use nom::combinator::map;
use nom::error::context;
use nom::sequence::separated_pair;
use std::fmt;

/// Certificate fingerprint attribute (`a=fingerprint`)
///
/// Both parts are kept as written, the algorithm name is case-insensitive and
/// the fingerprint is not required to be well formed hex.
///
/// [RFC8122](https://www.rfc-editor.org/rfc/rfc8122.html#section-5)
#[derive(Debug, Clone, PartialEq)]
pub struct Fingerprint {
    /// Hash function name e.g. `sha-256`
    pub algorithm: BytesStr,

    /// Colon separated uppercase hex bytes
    pub value: BytesStr,
}

impl Fingerprint {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing fingerprint-attribute",
            map(
                separated_pair(token, space1, token),
                |(algorithm, value)| Self {
                    algorithm: BytesStr::from_parse(src, algorithm),
                    value: BytesStr::from_parse(src, value),
                },
            ),
        )(i)
    }

    /// Decode the fingerprint into bytes, `None` if it is not well formed
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.value
            .split(':')
            .map(|hex| {
                if hex.len() == 2 {
                    u8::from_str_radix(hex, 16).ok()
                } else {
                    None
                }
            })
            .collect()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.algorithm, self.value)
    }
}
