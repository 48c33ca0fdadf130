//! RtpMap attribute (`a=rtpmap:...`)

use crate::{number, slash_num};
use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, space1};
use nom::bytes::complete::take_while1;
use nom::combinator::{map, opt};
use nom::error::context;
use nom::sequence::{preceded, tuple};
use std::fmt;

/// Encoding of a payload, taken from a rtpmap attribute (`a=rtpmap`)
///
/// Map a RTP payload number specified in the media description to a encoding.
///
/// Media-Level attribute
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-6.6)
#[derive(Debug, Clone, PartialEq)]
pub struct RtpMap {
    /// Name of the encoding
    pub codec: BytesStr,

    /// Clock rate of the encoding
    pub clock_rate: u32,

    /// Number of audio channels
    pub channels: Option<u32>,
}

impl RtpMap {
    /// Parse the value of a rtpmap attribute, returns the payload number it refers to and the encoding
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, (u8, Self)> {
        context(
            "parsing rtpmap",
            map(
                tuple((
                    // payload num
                    number::<u8>,
                    // encoding
                    preceded(
                        space1,
                        take_while1(|c: char| c != '/' && !c.is_ascii_whitespace()),
                    ),
                    // clock rate
                    slash_num,
                    // optional channels
                    opt(slash_num),
                )),
                |(payload, codec, clock_rate, channels)| {
                    let rtpmap = RtpMap {
                        codec: BytesStr::from_parse(src, codec),
                        clock_rate,
                        channels,
                    };

                    (payload, rtpmap)
                },
            ),
        )(i)
    }
}

impl fmt::Display for RtpMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.codec, self.clock_rate)?;

        if let Some(channels) = self.channels {
            write!(f, "/{channels}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rtpmap() {
        let input = BytesStr::from_static("0 PCMU/8000");

        let (rem, (payload, rtpmap)) = RtpMap::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());

        assert_eq!(payload, 0);
        assert_eq!(rtpmap.codec, "PCMU");
        assert_eq!(rtpmap.clock_rate, 8000);
        assert_eq!(rtpmap.channels, None);
    }

    #[test]
    fn rtpmap_channels() {
        let input = BytesStr::from_static("111 opus/48000/2");

        let (rem, (payload, rtpmap)) = RtpMap::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());

        assert_eq!(payload, 111);
        assert_eq!(rtpmap.codec, "opus");
        assert_eq!(rtpmap.clock_rate, 48000);
        assert_eq!(rtpmap.channels, Some(2));
    }

    #[test]
    fn rtpmap_missing_clock_rate() {
        let input = BytesStr::from_static("96 VP8");

        assert!(RtpMap::parse(input.as_ref(), &input).is_err());
    }

    #[test]
    fn rtpmap_print() {
        let rtpmap = RtpMap {
            codec: "telephone-event".into(),
            clock_rate: 8000,
            channels: None,
        };

        assert_eq!(rtpmap.to_string(), "telephone-event/8000");
    }
}
