#![warn(unreachable_pub)]

//! Parse and serialize SDP session descriptions.
//!
//! Parsing is lenient: only a missing or malformed version (`v=`) line fails. Every other line the parser
//! cannot make sense of is dropped, or kept verbatim where a passthrough exists.
//!
//! Serialization through [`format`] (or the [`fmt::Display`](std::fmt::Display) implementation of
//! [`SessionDescription`]) always produces the canonical field order with `\r\n` line endings.

use bytesstr::BytesStr;
use internal::IResult;
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map_res};
use nom::error::VerboseError;
use nom::sequence::preceded;
use internal::Finish;
use std::str::FromStr;

mod attributes;
mod connection;
mod key;
mod lines;
mod media;
mod media_description;
mod origin;
mod parser;
mod payload;
mod session_description;
mod time;

pub use attributes::{
    Attributes, Direction, ExtMap, ExtensionAttribute, Fingerprint, Fmtp, Rtcp, RtcpFeedback,
    RtcpFeedbackPt, RtpMap, Setup,
};
pub use connection::Connection;
pub use key::EncryptionKey;
pub use lines::{Line, lines};
pub use media::{Media, MediaType, TransportProtocol};
pub use media_description::MediaDescription;
pub use origin::Origin;
pub use parser::ParseSessionDescriptionError;
pub use payload::Payload;
pub use session_description::SessionDescription;
pub use time::{Repeat, Time, TimeZone};

/// Parse a complete SDP message
pub fn parse(text: &str) -> Result<SessionDescription, ParseSessionDescriptionError> {
    SessionDescription::parse(&BytesStr::from(text.to_owned()))
}

/// Serialize a session description into its canonical text form
pub fn format(session: &SessionDescription) -> String {
    session.to_string()
}

fn slash_num(i: &str) -> IResult<&str, u32> {
    preceded(char('/'), map_res(digit1, FromStr::from_str))(i)
}

fn number<T: FromStr>(i: &str) -> IResult<&str, T> {
    map_res(digit1, T::from_str)(i)
}

/// Run `parser` over the complete input, failing if anything is left over
fn complete<'i, O, F>(parser: F, i: &'i str) -> Result<O, VerboseError<&'i str>>
where
    F: FnMut(&'i str) -> IResult<&'i str, O>,
{
    all_consuming(parser)(i).finish().map(|(_, o)| o)
}
