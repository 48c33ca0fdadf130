use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, space1, token};
use nom::combinator::map;
use nom::error::context;
use nom::sequence::{preceded, tuple};
use std::fmt;

/// Connection field (`c=`), also used for the optional address of `a=rtcp`
///
/// The address is kept as written, including any `/<ttl>/<number of addresses>` suffix.
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-5.7)
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Network type, usually `IN`
    pub net_type: BytesStr,

    /// Address type, `IP4` or `IP6`
    pub addr_type: BytesStr,

    /// The connection address
    pub address: BytesStr,
}

impl Connection {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing connection",
            map(
                tuple((token, preceded(space1, token), preceded(space1, token))),
                |(net_type, addr_type, address)| Connection {
                    net_type: BytesStr::from_parse(src, net_type),
                    addr_type: BytesStr::from_parse(src, addr_type),
                    address: BytesStr::from_parse(src, address),
                },
            ),
        )(i)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.net_type, self.addr_type, self.address)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn connection() {
        let input = BytesStr::from_static("IN IP4 0.0.0.0");

        let (rem, connection) = Connection::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());

        assert_eq!(connection.net_type, "IN");
        assert_eq!(connection.addr_type, "IP4");
        assert_eq!(connection.address, "0.0.0.0");
    }

    #[test]
    fn connection_multicast() {
        let input = BytesStr::from_static("IN IP4 224.2.36.42/127/3");

        let (rem, connection) = Connection::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());
        assert_eq!(connection.address, "224.2.36.42/127/3");
    }

    #[test]
    fn connection_incomplete() {
        let input = BytesStr::from_static("IN IP4");

        assert!(Connection::parse(input.as_ref(), &input).is_err());
    }

    #[test]
    fn connection_print() {
        let connection = Connection {
            net_type: "IN".into(),
            addr_type: "IP6".into(),
            address: "::1".into(),
        };

        assert_eq!(connection.to_string(), "IN IP6 ::1");
    }
}
