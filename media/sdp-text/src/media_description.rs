use crate::{Attributes, Connection, Media, Payload};
use bytes::Bytes;
use bytesstr::BytesStr;
use std::fmt;

/// Part of the [`SessionDescription`](crate::SessionDescription) describes a single media session
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-5.14)
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDescription {
    /// Media description's media field (m=)
    pub media: Media,

    /// Payloads in the order they are listed in the media field
    pub payloads: Vec<Payload>,

    /// Non-numeric formats of the media field (e.g. `webrtc-datachannel`), listed after the payloads
    pub formats: Vec<BytesStr>,

    /// Media title (i field)
    pub title: Option<BytesStr>,

    /// Optional connection (c field)
    pub connection: Option<Connection>,

    /// Optional bandwidths (b fields), unparsed
    pub bandwidth: Vec<BytesStr>,

    /// Media level attributes
    pub attributes: Attributes,
}

impl MediaDescription {
    pub fn new(media: Media) -> Self {
        Self {
            media,
            payloads: vec![],
            formats: vec![],
            title: None,
            connection: None,
            bandwidth: vec![],
            attributes: Attributes::default(),
        }
    }

    /// Build a media description from a parsed media field and its raw format tokens.
    ///
    /// Numeric formats become payloads, a repeated payload number is only added once.
    pub(crate) fn from_media_field(src: &Bytes, media: Media, formats: Vec<&str>) -> Self {
        let mut this = Self::new(media);

        for format in formats {
            match format.parse::<u8>() {
                Ok(id) if this.payload(id).is_some() => {
                    log::debug!("ignoring repeated payload {id} in media field");
                }
                Ok(id) => this.payloads.push(Payload::new(id)),
                Err(_) => this.formats.push(BytesStr::from_parse(src, format)),
            }
        }

        this
    }

    pub fn payload(&self, id: u8) -> Option<&Payload> {
        self.payloads.iter().find(|payload| payload.id == id)
    }

    pub fn payload_mut(&mut self, id: u8) -> Option<&mut Payload> {
        self.payloads.iter_mut().find(|payload| payload.id == id)
    }
}

impl fmt::Display for MediaDescription {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "m={}", self.media)?;

        for payload in &self.payloads {
            write!(f, " {}", payload.id)?;
        }

        for format in &self.formats {
            write!(f, " {format}")?;
        }

        f.write_str("\r\n")?;

        if let Some(title) = &self.title {
            write!(f, "i={title}\r\n")?;
        }

        if let Some(conn) = &self.connection {
            write!(f, "c={conn}\r\n")?;
        }

        for bw in &self.bandwidth {
            write!(f, "b={bw}\r\n")?;
        }

        for payload in &self.payloads {
            write!(f, "{payload}")?;
        }

        write!(f, "{}", self.attributes)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{MediaType, RtpMap, TransportProtocol};

    #[test]
    fn payloads_keep_media_field_order() {
        let src = BytesStr::from_static("111 103 104 111 webrtc-datachannel");
        let formats = src.split(' ').collect();

        let media = Media {
            media_type: MediaType::Audio,
            port: 9,
            port_count: None,
            protocol: TransportProtocol::UdpTlsRtpSavpf,
        };

        let desc = MediaDescription::from_media_field(src.as_ref(), media, formats);

        let ids: Vec<u8> = desc.payloads.iter().map(|p| p.id).collect();
        assert_eq!(ids, [111, 103, 104]);
        assert_eq!(desc.formats, [BytesStr::from_static("webrtc-datachannel")]);
    }

    #[test]
    fn media_description_print() {
        let mut desc = MediaDescription::new(Media {
            media_type: MediaType::Audio,
            port: 49170,
            port_count: None,
            protocol: TransportProtocol::RtpAvp,
        });

        desc.payloads.push(Payload::new(0));
        desc.payloads.push(Payload::new(8));
        desc.payloads[1].rtp = Some(RtpMap {
            codec: "PCMA".into(),
            clock_rate: 8000,
            channels: None,
        });
        desc.attributes.ptime = Some(20);

        assert_eq!(
            desc.to_string(),
            "m=audio 49170 RTP/AVP 0 8\r\n\
             a=rtpmap:8 PCMA/8000\r\n\
             a=ptime:20\r\n"
        );
    }
}
