//! Format parameters attribute (`a=fmtp:...`)

use crate::number;
use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, rest, space1};
use nom::combinator::map;
use nom::error::context;
use nom::sequence::{preceded, tuple};
use std::fmt;

/// Specify additional parameters for a format specified by a `rtpmap`
///
/// Media-Level attribute
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-6.15)
#[derive(Debug, Clone, PartialEq)]
pub struct Fmtp {
    /// The format the parameter is for
    pub format: u8,

    /// The parameters as string
    pub params: BytesStr,
}

impl Fmtp {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing fmtp",
            map(
                tuple((
                    // format & remaining into params
                    number::<u8>,
                    preceded(space1, rest),
                )),
                |(format, params)| Fmtp {
                    format,
                    params: BytesStr::from_parse(src, params),
                },
            ),
        )(i)
    }
}

impl fmt::Display for Fmtp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.format, self.params)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fmtp() {
        let input = BytesStr::from_static("111 minptime=10; useinbandfec=1");

        let (rem, fmtp) = Fmtp::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());

        assert_eq!(fmtp.format, 111);
        assert_eq!(fmtp.params, "minptime=10; useinbandfec=1");
    }

    #[test]
    fn fmtp_without_params() {
        let input = BytesStr::from_static("111");

        assert!(Fmtp::parse(input.as_ref(), &input).is_err());
    }

    #[test]
    fn fmtp_print() {
        let fmtp = Fmtp {
            format: 111,
            params: "some=param".into(),
        };

        assert_eq!(fmtp.to_string(), "111 some=param");
    }
}
