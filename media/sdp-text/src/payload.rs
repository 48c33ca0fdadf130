use crate::RtpMap;
use bytesstr::BytesStr;
use std::fmt;

/// A RTP payload type listed in a media field, with all attributes referring to it
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    /// Payload type number, unique inside its media description
    pub id: u8,

    /// Encoding (a=rtpmap)
    pub rtp: Option<RtpMap>,

    /// Format parameters (a=fmtp), unparsed
    pub fmtp: Option<BytesStr>,

    /// RTCP feedback types (a=rtcp-fb) in order of appearance
    pub rtcp_fb: Vec<BytesStr>,
}

impl Payload {
    pub fn new(id: u8) -> Self {
        Self {
            id,
            rtp: None,
            fmtp: None,
            rtcp_fb: vec![],
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(rtp) = &self.rtp {
            write!(f, "a=rtpmap:{} {rtp}\r\n", self.id)?;
        }

        if let Some(fmtp) = &self.fmtp {
            write!(f, "a=fmtp:{} {fmtp}\r\n", self.id)?;
        }

        for fb in &self.rtcp_fb {
            write!(f, "a=rtcp-fb:{} {fb}\r\n", self.id)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn payload_without_attributes_prints_nothing() {
        assert_eq!(Payload::new(0).to_string(), "");
    }

    #[test]
    fn payload_print() {
        let payload = Payload {
            id: 96,
            rtp: Some(RtpMap {
                codec: "VP8".into(),
                clock_rate: 90000,
                channels: None,
            }),
            fmtp: Some("max-fr=30".into()),
            rtcp_fb: vec!["nack".into(), "nack pli".into()],
        };

        assert_eq!(
            payload.to_string(),
            "a=rtpmap:96 VP8/90000\r\n\
             a=fmtp:96 max-fr=30\r\n\
             a=rtcp-fb:96 nack\r\n\
             a=rtcp-fb:96 nack pli\r\n"
        );
    }
}
