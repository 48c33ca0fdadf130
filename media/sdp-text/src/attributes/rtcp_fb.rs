use crate::number;
use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, rest, space1};
use nom::branch::alt;
use nom::character::complete::char;
use nom::combinator::map;
use nom::error::context;
use nom::sequence::separated_pair;
use std::fmt;

/// Payload type a RTCP feedback attribute applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcpFeedbackPt {
    /// `*`, every payload of the media description
    Any,
    Pt(u8),
}

impl fmt::Display for RtcpFeedbackPt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RtcpFeedbackPt::Any => f.write_str("*"),
            RtcpFeedbackPt::Pt(pt) => write!(f, "{pt}"),
        }
    }
}

/// RTCP feedback attribute (`a=rtcp-fb`), the feedback description is kept unparsed
///
/// [RFC4585](https://www.rfc-editor.org/rfc/rfc4585.html#section-4.2)
#[derive(Debug, Clone, PartialEq)]
pub struct RtcpFeedback {
    pub pt: RtcpFeedbackPt,

    /// Feedback type and parameters e.g. `nack pli`
    pub value: BytesStr,
}

impl RtcpFeedback {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing rtcp-fb",
            map(
                separated_pair(
                    alt((
                        map(char('*'), |_| RtcpFeedbackPt::Any),
                        map(number::<u8>, RtcpFeedbackPt::Pt),
                    )),
                    space1,
                    rest,
                ),
                |(pt, value)| RtcpFeedback {
                    pt,
                    value: BytesStr::from_parse(src, value),
                },
            ),
        )(i)
    }
}

impl fmt::Display for RtcpFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pt, self.value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rtcp_fb() {
        let input = BytesStr::from_static("96 nack pli");

        let (rem, fb) = RtcpFeedback::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());

        assert_eq!(fb.pt, RtcpFeedbackPt::Pt(96));
        assert_eq!(fb.value, "nack pli");
    }

    #[test]
    fn rtcp_fb_wildcard() {
        let input = BytesStr::from_static("* transport-cc");

        let (rem, fb) = RtcpFeedback::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());

        assert_eq!(fb.pt, RtcpFeedbackPt::Any);
        assert_eq!(fb.to_string(), "* transport-cc");
    }
}
