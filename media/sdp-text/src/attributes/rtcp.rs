//! RTCP Attribute (`a=rtcp:...`)

use crate::{Connection, number};
use bytes::Bytes;
use internal::{IResult, space1};
use nom::combinator::{map, opt};
use nom::error::context;
use nom::sequence::{pair, preceded};
use std::fmt;

/// Rtcp attribute (`a=rtcp`)
///
/// Specify an alternative address/port for RTCP
///
/// Media Level attribute
///
/// [RFC3605](https://datatracker.ietf.org/doc/html/rfc3605)
#[derive(Debug, Clone, PartialEq)]
pub struct Rtcp {
    /// Port to be used for RTCP
    pub port: u16,

    /// Optional address
    pub address: Option<Connection>,
}

impl Rtcp {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing rtcp attribute",
            map(
                pair(
                    // port
                    number::<u16>,
                    // optional address
                    opt(preceded(space1, |i: &'i str| Connection::parse(src, i))),
                ),
                |(port, address)| Rtcp { port, address },
            ),
        )(i)
    }
}

impl fmt::Display for Rtcp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.port)?;

        if let Some(address) = &self.address {
            write!(f, " {address}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bytesstr::BytesStr;

    #[test]
    fn rtcp() {
        let input = BytesStr::from_static("4444");

        let (rem, rtcp) = Rtcp::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());

        assert_eq!(rtcp.port, 4444);
        assert!(rtcp.address.is_none());
    }

    #[test]
    fn rtcp_address() {
        let input = BytesStr::from_static("9 IN IP4 0.0.0.0");

        let (rem, rtcp) = Rtcp::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());

        assert_eq!(rtcp.port, 9);
        assert_eq!(rtcp.address.unwrap().address, "0.0.0.0");
    }

    #[test]
    fn rtcp_address_print() {
        let rtcp = Rtcp {
            port: 4444,
            address: Some(Connection {
                net_type: "IN".into(),
                addr_type: "IP4".into(),
                address: "192.168.123.222".into(),
            }),
        };

        assert_eq!(rtcp.to_string(), "4444 IN IP4 192.168.123.222");
    }
}
