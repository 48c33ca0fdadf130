use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, space1, token};
use nom::combinator::map;
use nom::error::context;
use nom::multi::separated_list1;
use std::fmt;

/// Origin field (`o=`)
///
/// Parsed permissively: a line with less than six fields leaves the trailing fields unset.
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-5.2)
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
    /// Username of the origin, `-` if the originating host does not support user ids
    pub username: BytesStr,

    /// Globally unique session identifier
    pub session_id: Option<BytesStr>,

    /// The version of the session, changes with each modification/renegotiation.
    pub session_version: Option<BytesStr>,

    /// Network type, usually `IN`
    pub net_type: Option<BytesStr>,

    /// Address type, `IP4` or `IP6`
    pub addr_type: Option<BytesStr>,

    /// The source address of the message
    pub address: Option<BytesStr>,
}

impl Origin {
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, Self> {
        context(
            "parsing origin field",
            map(separated_list1(space1, token), |fields| {
                let mut fields = fields
                    .into_iter()
                    .map(|field| BytesStr::from_parse(src, field));

                Origin {
                    // separated_list1 yields at least one field
                    username: fields.next().unwrap_or_else(BytesStr::empty),
                    session_id: fields.next(),
                    session_version: fields.next(),
                    net_type: fields.next(),
                    addr_type: fields.next(),
                    address: fields.next(),
                }
            }),
        )(i)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.username)?;

        let trailing = [
            &self.session_id,
            &self.session_version,
            &self.net_type,
            &self.addr_type,
            &self.address,
        ];

        for field in trailing.into_iter().map_while(Option::as_ref) {
            write!(f, " {field}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn origin() {
        let input = BytesStr::from_static("- 718035783275703419 2 IN IP4 127.0.0.1");

        let (rem, origin) = Origin::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());

        assert_eq!(origin.username, "-");
        assert_eq!(origin.session_id.unwrap(), "718035783275703419");
        assert_eq!(origin.session_version.unwrap(), "2");
        assert_eq!(origin.net_type.unwrap(), "IN");
        assert_eq!(origin.addr_type.unwrap(), "IP4");
        assert_eq!(origin.address.unwrap(), "127.0.0.1");
    }

    #[test]
    fn origin_truncated() {
        let input = BytesStr::from_static("jdoe 2890844526");

        let (rem, origin) = Origin::parse(input.as_ref(), &input).unwrap();

        assert!(rem.is_empty());

        assert_eq!(origin.username, "jdoe");
        assert_eq!(origin.session_id.as_deref(), Some("2890844526"));
        assert!(origin.session_version.is_none());
        assert!(origin.address.is_none());

        assert_eq!(origin.to_string(), "jdoe 2890844526");
    }

    #[test]
    fn origin_print() {
        let origin = Origin {
            username: "-".into(),
            session_id: Some("123456789".into()),
            session_version: Some("987654321".into()),
            net_type: Some("IN".into()),
            addr_type: Some("IP4".into()),
            address: Some("192.168.123.222".into()),
        };

        assert_eq!(
            origin.to_string(),
            "- 123456789 987654321 IN IP4 192.168.123.222"
        );
    }
}
