use crate::parser::{ParseSessionDescriptionError, Parser};
use crate::{
    Attributes, Connection, EncryptionKey, MediaDescription, Origin, Repeat, Time, TimeZone,
};
use bytesstr::BytesStr;
use std::fmt;

/// The Session Description message. Can be serialized to valid SDP using the [`fmt::Display`] implementation and
/// parse SDP using [`SessionDescription::parse`].
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-5)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionDescription {
    /// Protocol version (v field)
    pub version: u32,

    /// Origin (o field)
    pub origin: Option<Origin>,

    /// The name of the sdp session (s field)
    pub session_name: Option<BytesStr>,

    /// Session information (i field)
    pub session_info: Option<BytesStr>,

    /// URI of additional information (u field)
    pub uri: Option<BytesStr>,

    /// Email addresses (e fields)
    pub email: Vec<BytesStr>,

    /// Phone numbers (p fields)
    pub phone: Vec<BytesStr>,

    /// Session start/stop time (t field)
    pub timing: Option<Time>,

    /// Repeat times (r field)
    pub repeat: Option<Repeat>,

    /// Time zone adjustments (z field)
    pub timezones: Vec<TimeZone>,

    /// Encryption keys (k fields)
    pub encryption_key: Vec<EncryptionKey>,

    /// Session level connection (c field)
    pub connection: Option<Connection>,

    /// Bandwidth (b fields), unparsed
    pub bandwidth: Vec<BytesStr>,

    /// Media grouping (a=group), unparsed
    pub group: Option<BytesStr>,

    /// Source attributes (a=ssrc) of the whole message, verbatim and in order of appearance
    pub ssrc: Vec<BytesStr>,

    /// Session level attributes
    pub attributes: Attributes,

    /// Media descriptions
    pub media: Vec<MediaDescription>,
}

impl SessionDescription {
    pub fn parse(src: &BytesStr) -> Result<Self, ParseSessionDescriptionError> {
        Parser::parse(src)
    }
}

impl fmt::Display for SessionDescription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v={}\r\n", self.version)?;

        if let Some(origin) = &self.origin {
            write!(f, "o={origin}\r\n")?;
        }

        if let Some(name) = &self.session_name {
            // an empty session name is written as a single space
            if name.is_empty() {
                f.write_str("s= \r\n")?;
            } else {
                write!(f, "s={name}\r\n")?;
            }
        }

        if let Some(info) = &self.session_info {
            write!(f, "i={info}\r\n")?;
        }

        if let Some(uri) = &self.uri {
            write!(f, "u={uri}\r\n")?;
        }

        for email in &self.email {
            write!(f, "e={email}\r\n")?;
        }

        for phone in &self.phone {
            write!(f, "p={phone}\r\n")?;
        }

        if let Some(time) = &self.timing {
            write!(f, "t={time}\r\n")?;
        }

        if let Some(repeat) = &self.repeat {
            write!(f, "r={repeat}\r\n")?;
        }

        if let Some((first, rest)) = self.timezones.split_first() {
            write!(f, "z={first}")?;

            for zone in rest {
                write!(f, " {zone}")?;
            }

            f.write_str("\r\n")?;
        }

        for key in &self.encryption_key {
            write!(f, "k={key}\r\n")?;
        }

        if let Some(conn) = &self.connection {
            write!(f, "c={conn}\r\n")?;
        }

        for bw in &self.bandwidth {
            write!(f, "b={bw}\r\n")?;
        }

        if let Some(group) = &self.group {
            write!(f, "a=group:{group}\r\n")?;
        }

        write!(f, "{}", self.attributes)?;

        for ssrc in &self.ssrc {
            write!(f, "a=ssrc:{ssrc}\r\n")?;
        }

        for media_description in &self.media {
            write!(f, "{media_description}")?;
        }

        Ok(())
    }
}
