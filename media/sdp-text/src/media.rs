use crate::{number, slash_num};
use bytes::Bytes;
use bytesstr::BytesStr;
use internal::{IResult, space1, token};
use nom::combinator::{map, opt};
use nom::error::context;
use nom::multi::many0;
use nom::sequence::{pair, preceded, tuple};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MediaType {
    Audio,
    Video,
    Text,
    App,
    Message,
    Other(BytesStr),
}

impl MediaType {
    fn from_token(src: &Bytes, token: &str) -> Self {
        match token {
            "audio" => MediaType::Audio,
            "video" => MediaType::Video,
            "text" => MediaType::Text,
            "application" => MediaType::App,
            "message" => MediaType::Message,
            other => MediaType::Other(BytesStr::from_parse(src, other)),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MediaType::Audio => f.write_str("audio"),
            MediaType::Video => f.write_str("video"),
            MediaType::Text => f.write_str("text"),
            MediaType::App => f.write_str("application"),
            MediaType::Message => f.write_str("message"),
            MediaType::Other(str) => f.write_str(str),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransportProtocol {
    /// Plain UDP
    Udp,

    /// RTP over UDP
    RtpAvp,

    /// RTP with [RFC4585](https://www.rfc-editor.org/rfc/rfc4585.html) feedback
    RtpAvpf,

    /// SRTP over UDP
    RtpSavp,

    /// SRTP with [RFC5124](https://www.rfc-editor.org/rfc/rfc5124.html)
    RtpSavpf,

    /// DTLS-SRTP
    UdpTlsRtpSavp,

    /// DTLS-SRTP with [RFC5124](https://www.rfc-editor.org/rfc/rfc5124.html)
    UdpTlsRtpSavpf,

    /// Other unknown
    Other(BytesStr),
}

impl TransportProtocol {
    fn from_token(src: &Bytes, token: &str) -> Self {
        match token {
            "udp" => TransportProtocol::Udp,
            "RTP/AVP" => TransportProtocol::RtpAvp,
            "RTP/AVPF" => TransportProtocol::RtpAvpf,
            "RTP/SAVP" => TransportProtocol::RtpSavp,
            "RTP/SAVPF" => TransportProtocol::RtpSavpf,
            "UDP/TLS/RTP/SAVP" => TransportProtocol::UdpTlsRtpSavp,
            "UDP/TLS/RTP/SAVPF" => TransportProtocol::UdpTlsRtpSavpf,
            other => TransportProtocol::Other(BytesStr::from_parse(src, other)),
        }
    }
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransportProtocol::Udp => f.write_str("udp"),
            TransportProtocol::RtpAvp => f.write_str("RTP/AVP"),
            TransportProtocol::RtpAvpf => f.write_str("RTP/AVPF"),
            TransportProtocol::RtpSavp => f.write_str("RTP/SAVP"),
            TransportProtocol::RtpSavpf => f.write_str("RTP/SAVPF"),
            TransportProtocol::UdpTlsRtpSavp => f.write_str("UDP/TLS/RTP/SAVP"),
            TransportProtocol::UdpTlsRtpSavpf => f.write_str("UDP/TLS/RTP/SAVPF"),
            TransportProtocol::Other(str) => f.write_str(str),
        }
    }
}

/// Media field (`m=`) without its format list
///
/// The formats are owned by the [`MediaDescription`](crate::MediaDescription) as payloads.
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-5.14)
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub media_type: MediaType,
    pub port: u16,
    pub port_count: Option<u32>,
    pub protocol: TransportProtocol,
}

impl Media {
    /// Parse a media field, returns the media and the raw format tokens in order of appearance
    pub fn parse<'i>(src: &Bytes, i: &'i str) -> IResult<&'i str, (Self, Vec<&'i str>)> {
        context(
            "parsing media field",
            map(
                tuple((
                    token,
                    preceded(space1, pair(number::<u16>, opt(slash_num))),
                    preceded(space1, token),
                    many0(preceded(space1, token)),
                )),
                |(media_type, (port, port_count), protocol, formats)| {
                    let media = Media {
                        media_type: MediaType::from_token(src, media_type),
                        port,
                        port_count,
                        protocol: TransportProtocol::from_token(src, protocol),
                    };

                    (media, formats)
                },
            ),
        )(i)
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.media_type, self.port)?;

        if let Some(port_count) = self.port_count {
            write!(f, "/{port_count}")?;
        }

        write!(f, " {}", self.protocol)
    }
}
