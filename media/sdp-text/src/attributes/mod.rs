use crate::{complete, number};
use bytes::Bytes;
use bytesstr::BytesStr;
use nom::error::VerboseError;
use std::fmt;

mod direction;
mod extmap;
mod fingerprint;
mod fmtp;
mod rtcp;
mod rtcp_fb;
mod rtpmap;
mod setup;

pub use direction::Direction;
pub use extmap::ExtMap;
pub use fingerprint::Fingerprint;
pub use fmtp::Fmtp;
pub use rtcp::Rtcp;
pub use rtcp_fb::{RtcpFeedback, RtcpFeedbackPt};
pub use rtpmap::RtpMap;
pub use setup::Setup;

/// `name:[value]` pair which contains an unparsed/unknown attribute
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionAttribute {
    /// Attribute name, the part before the optional `:`
    pub name: BytesStr,

    /// if the optional `:` is present the part parsed after is stored inside `value`
    pub value: Option<BytesStr>,
}

impl fmt::Display for ExtensionAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a={}", self.name)?;

        if let Some(value) = &self.value {
            write!(f, ":{value}")?;
        }

        Ok(())
    }
}

/// Attributes which can appear at session and media level
///
/// Single valued attributes keep the last occurrence. Everything that isn't represented
/// by a field is kept in `extensions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    /// rtcp attribute
    pub rtcp: Option<Rtcp>,

    /// ICE username fragment
    pub ice_ufrag: Option<BytesStr>,

    /// ICE password
    pub ice_pwd: Option<BytesStr>,

    /// ICE options, unparsed
    pub ice_options: Option<BytesStr>,

    /// ICE lite flag (a=ice-lite)
    pub ice_lite: bool,

    /// Fingerprint attribute (a=fingerprint)
    pub fingerprint: Option<Fingerprint>,

    /// Setup attribute (a=setup)
    pub setup: Option<Setup>,

    /// Media ID (a=mid)
    pub mid: Option<BytesStr>,

    /// ExtMap attributes
    pub extmap: Vec<ExtMap>,

    /// Media direction attribute
    pub direction: Option<Direction>,

    /// rtcp-mux attribute
    pub rtcp_mux: bool,

    /// WebRTC media stream semantic (a=msid-semantic), kept verbatim
    pub msid_semantic: Option<BytesStr>,

    /// Maximum packet time in milliseconds
    pub maxptime: Option<u32>,

    /// Packet time in milliseconds
    pub ptime: Option<u32>,

    /// Additional attributes, in order of appearance
    pub extensions: Vec<ExtensionAttribute>,
}

impl Attributes {
    /// Value of the last extension attribute with the given name
    pub fn get(&self, name: &str) -> Option<&ExtensionAttribute> {
        self.extensions.iter().rev().find(|attr| attr.name.as_str() == name)
    }

    /// Apply an attribute line, split into its name and optional value.
    ///
    /// Returns an error if a known attribute has a malformed value, in that case nothing is changed.
    pub(crate) fn apply<'i>(
        &mut self,
        src: &Bytes,
        name: &'i str,
        value: Option<&'i str>,
    ) -> Result<(), VerboseError<&'i str>> {
        let raw = |value: &str| BytesStr::from_parse(src, value);

        match (name, value) {
            ("rtcp", Some(value)) => {
                self.rtcp = Some(complete(|i| Rtcp::parse(src, i), value)?);
            }
            ("ice-ufrag", Some(value)) => self.ice_ufrag = Some(raw(value)),
            ("ice-pwd", Some(value)) => self.ice_pwd = Some(raw(value)),
            ("ice-options", Some(value)) => self.ice_options = Some(raw(value)),
            ("ice-lite", None) => self.ice_lite = true,
            ("fingerprint", Some(value)) => {
                self.fingerprint = Some(complete(|i| Fingerprint::parse(src, i), value)?);
            }
            ("setup", Some(value)) => match Setup::from_value(value) {
                Some(setup) => self.setup = Some(setup),
                None => self.push_extension(src, name, Some(value)),
            },
            ("mid", Some(value)) => self.mid = Some(raw(value)),
            ("extmap", Some(value)) => {
                self.extmap
                    .push(complete(|i| ExtMap::parse(src, i), value)?);
            }
            ("rtcp-mux", None) => self.rtcp_mux = true,
            ("msid-semantic", Some(value)) => self.msid_semantic = Some(raw(value)),
            ("maxptime", Some(value)) => self.maxptime = Some(complete(number::<u32>, value)?),
            ("ptime", Some(value)) => self.ptime = Some(complete(number::<u32>, value)?),
            (flag, None) if Direction::from_name(flag).is_some() => {
                self.direction = Direction::from_name(flag);
            }
            _ => self.push_extension(src, name, value),
        }

        Ok(())
    }

    pub(crate) fn push_extension(&mut self, src: &Bytes, name: &str, value: Option<&str>) {
        self.extensions.push(ExtensionAttribute {
            name: BytesStr::from_parse(src, name),
            value: value.map(|value| BytesStr::from_parse(src, value)),
        });
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(rtcp) = &self.rtcp {
            write!(f, "a=rtcp:{rtcp}\r\n")?;
        }

        if let Some(ufrag) = &self.ice_ufrag {
            write!(f, "a=ice-ufrag:{ufrag}\r\n")?;
        }

        if let Some(pwd) = &self.ice_pwd {
            write!(f, "a=ice-pwd:{pwd}\r\n")?;
        }

        if let Some(options) = &self.ice_options {
            write!(f, "a=ice-options:{options}\r\n")?;
        }

        if self.ice_lite {
            f.write_str("a=ice-lite\r\n")?;
        }

        if let Some(fingerprint) = &self.fingerprint {
            write!(f, "a=fingerprint:{fingerprint}\r\n")?;
        }

        if let Some(setup) = self.setup {
            write!(f, "a=setup:{setup}\r\n")?;
        }

        if let Some(mid) = &self.mid {
            write!(f, "a=mid:{mid}\r\n")?;
        }

        for extmap in &self.extmap {
            write!(f, "a=extmap:{extmap}\r\n")?;
        }

        if let Some(direction) = self.direction {
            write!(f, "a={direction}\r\n")?;
        }

        if self.rtcp_mux {
            f.write_str("a=rtcp-mux\r\n")?;
        }

        if let Some(semantic) = &self.msid_semantic {
            write!(f, "a=msid-semantic:{semantic}\r\n")?;
        }

        if let Some(maxptime) = self.maxptime {
            write!(f, "a=maxptime:{maxptime}\r\n")?;
        }

        if let Some(ptime) = self.ptime {
            write!(f, "a=ptime:{ptime}\r\n")?;
        }

        for attr in &self.extensions {
            write!(f, "{attr}\r\n")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn apply(attributes: &mut Attributes, line: &'static str) -> Result<(), String> {
        let src = BytesStr::from_static(line);
        let (name, value) = match src.split_once(':') {
            Some((name, value)) => (name, Some(value)),
            None => (src.as_str(), None),
        };

        attributes
            .apply(src.as_ref(), name, value)
            .map_err(|e| e.to_string())
    }

    #[test]
    fn known_attributes() {
        let mut attributes = Attributes::default();

        for line in [
            "rtcp:9 IN IP4 0.0.0.0",
            "ice-ufrag:Lw5NgNWQ",
            "ice-pwd:qfy9wvi9J3g7G",
            "setup:active",
            "mid:audio",
            "extmap:3 http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time",
            "sendrecv",
            "rtcp-mux",
            "maxptime:60",
        ] {
            apply(&mut attributes, line).unwrap();
        }

        assert_eq!(attributes.rtcp.unwrap().port, 9);
        assert_eq!(attributes.ice_ufrag.unwrap(), "Lw5NgNWQ");
        assert_eq!(attributes.ice_pwd.unwrap(), "qfy9wvi9J3g7G");
        assert_eq!(attributes.setup, Some(Setup::Active));
        assert_eq!(attributes.mid.unwrap(), "audio");
        assert_eq!(attributes.extmap.len(), 1);
        assert_eq!(attributes.direction, Some(Direction::SendRecv));
        assert!(attributes.rtcp_mux);
        assert_eq!(attributes.maxptime, Some(60));
        assert!(attributes.extensions.is_empty());
    }

    #[test]
    fn last_occurrence_wins() {
        let mut attributes = Attributes::default();

        apply(&mut attributes, "mid:0").unwrap();
        apply(&mut attributes, "sendonly").unwrap();
        apply(&mut attributes, "mid:1").unwrap();
        apply(&mut attributes, "inactive").unwrap();

        assert_eq!(attributes.mid.unwrap(), "1");
        assert_eq!(attributes.direction, Some(Direction::Inactive));
    }

    #[test]
    fn malformed_known_attribute() {
        let mut attributes = Attributes::default();

        assert!(apply(&mut attributes, "maxptime:sixty").is_err());
        assert!(apply(&mut attributes, "rtcp:9 IN").is_err());

        assert_eq!(attributes, Attributes::default());
    }

    #[test]
    fn unknown_attributes_are_kept_in_order() {
        let mut attributes = Attributes::default();

        apply(&mut attributes, "candidate:1 1 udp 2122260223 192.168.0.2 54321 typ host").unwrap();
        apply(&mut attributes, "end-of-candidates").unwrap();
        apply(&mut attributes, "candidate:2 1 udp 2122194687 10.0.0.2 54322 typ host").unwrap();
        apply(&mut attributes, "setup:sometimes").unwrap();

        assert_eq!(attributes.extensions.len(), 4);
        assert!(attributes.setup.is_none());

        let candidate = attributes.get("candidate").unwrap();
        assert!(candidate.value.as_ref().unwrap().starts_with("2 1 udp"));
        assert!(attributes.get("end-of-candidates").unwrap().value.is_none());

        assert_eq!(
            attributes.to_string(),
            "a=candidate:1 1 udp 2122260223 192.168.0.2 54321 typ host\r\n\
             a=end-of-candidates\r\n\
             a=candidate:2 1 udp 2122194687 10.0.0.2 54322 typ host\r\n\
             a=setup:sometimes\r\n"
        );
    }

    #[test]
    fn print_order() {
        let attributes = Attributes {
            mid: Some("video".into()),
            direction: Some(Direction::RecvOnly),
            rtcp_mux: true,
            setup: Some(Setup::ActPass),
            ..Default::default()
        };

        assert_eq!(
            attributes.to_string(),
            "a=setup:actpass\r\na=mid:video\r\na=recvonly\r\na=rtcp-mux\r\n"
        );
    }
}
