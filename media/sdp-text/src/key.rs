use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, rest};
use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::combinator::{map, opt};
use nom::error::context;
use nom::sequence::{pair, preceded};
use std::fmt;

/// Encryption key field (`k=`), `<method>[:<encryption key>]`
///
/// Obsolete but still emitted by some implementations.
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-5.12)
#[derive(Debug, Clone, PartialEq)]
pub struct EncryptionKey {
    /// `clear`, `base64`, `uri` or `prompt`
    pub method: BytesStr,
    pub key: Option<BytesStr>,
}

impl EncryptionKey {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing encryption key",
            map(
                pair(
                    take_while1(|c: char| c != ':'),
                    opt(preceded(char(':'), rest)),
                ),
                |(method, key)| EncryptionKey {
                    method: BytesStr::from_parse(src, method),
                    key: key.map(|key| BytesStr::from_parse(src, key)),
                },
            ),
        )(i)
    }
}

impl fmt::Display for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.method)?;

        if let Some(key) = &self.key {
            write!(f, ":{key}")?;
        }

        Ok(())
    }
}
