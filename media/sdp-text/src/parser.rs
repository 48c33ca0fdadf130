use crate::lines::{Line, lines};
use crate::{
    Connection, EncryptionKey, Fmtp, Media, MediaDescription, Origin, Payload, Repeat,
    RtcpFeedback, RtcpFeedbackPt, RtpMap, SessionDescription, Time, TimeZone, complete, number,
};
use bytes::Bytes;
use bytesstr::BytesStr;

#[derive(Debug, thiserror::Error)]
pub enum ParseSessionDescriptionError {
    #[error("message is missing the version field (v=) in its first line")]
    MissingVersion,
    #[error("line {line}: invalid version {value:?}")]
    InvalidVersion { line: usize, value: String },
}

/// Which part of the message the current line belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
enum Scope {
    /// Before the first media field
    Session,

    /// Index of the media description opened by the last media field
    Media(usize),

    /// The last media field was malformed, lines until the next one are dropped
    Discarded,
}

pub(crate) struct Parser<'s> {
    src: &'s BytesStr,
    scope: Scope,
    session: SessionDescription,
}

impl<'s> Parser<'s> {
    pub(crate) fn parse(src: &'s BytesStr) -> Result<SessionDescription, ParseSessionDescriptionError> {
        let mut lines = lines(src);

        let first = lines
            .next()
            .ok_or(ParseSessionDescriptionError::MissingVersion)?;

        let version = first
            .text
            .strip_prefix("v=")
            .ok_or(ParseSessionDescriptionError::MissingVersion)?;

        let version = complete(number::<u32>, version).map_err(|_| {
            ParseSessionDescriptionError::InvalidVersion {
                line: first.number,
                value: version.into(),
            }
        })?;

        let mut parser = Parser {
            src,
            scope: Scope::Session,
            session: SessionDescription {
                version,
                ..Default::default()
            },
        };

        for line in lines {
            parser.parse_line(line);
        }

        Ok(parser.session)
    }

    fn parse_line(&mut self, line: Line<'s>) {
        let Some(value) = line.text.get(2..) else {
            log::debug!("line {}: dropping {:?}, not a field", line.number, line.text);
            return;
        };

        let src: &Bytes = self.src.as_ref();

        match line.text.as_bytes() {
            [b'v', b'=', ..] => {
                log::debug!("line {}: ignoring repeated version field", line.number);
            }
            [b'o', b'=', ..] => match complete(|i| Origin::parse(src, i), value) {
                Ok(origin) => self.session.origin = Some(origin),
                Err(e) => log::debug!("line {}: dropping origin, {e}", line.number),
            },
            [b's', b'=', ..] => {
                self.session.session_name = Some(self.src.slice_ref(value));
            }
            [b'i', b'=', ..] => {
                let info = self.src.slice_ref(value);

                match self.scope {
                    Scope::Session => self.session.session_info = Some(info),
                    Scope::Media(index) => self.session.media[index].title = Some(info),
                    Scope::Discarded => {
                        log::debug!("line {}: dropping title of discarded media", line.number);
                    }
                }
            }
            [b'u', b'=', ..] => self.session.uri = Some(self.src.slice_ref(value)),
            [b'e', b'=', ..] => self.session.email.push(self.src.slice_ref(value)),
            [b'p', b'=', ..] => self.session.phone.push(self.src.slice_ref(value)),
            [b't', b'=', ..] => match complete(Time::parse, value) {
                Ok(time) => self.session.timing = Some(time),
                Err(e) => log::debug!("line {}: dropping time, {e}", line.number),
            },
            [b'r', b'=', ..] => match complete(Repeat::parse, value) {
                Ok(repeat) => self.session.repeat = Some(repeat),
                Err(e) => log::debug!("line {}: dropping repeat times, {e}", line.number),
            },
            [b'z', b'=', ..] => match complete(TimeZone::parse_list, value) {
                Ok(timezones) => self.session.timezones = timezones,
                Err(e) => log::debug!("line {}: dropping time zones, {e}", line.number),
            },
            [b'k', b'=', ..] => match complete(|i| EncryptionKey::parse(src, i), value) {
                Ok(key) => self.session.encryption_key.push(key),
                Err(e) => log::debug!("line {}: dropping encryption key, {e}", line.number),
            },
            [b'c', b'=', ..] => match complete(|i| Connection::parse(src, i), value) {
                Ok(connection) => match self.scope {
                    Scope::Session => self.session.connection = Some(connection),
                    Scope::Media(index) => self.session.media[index].connection = Some(connection),
                    Scope::Discarded => {
                        log::debug!("line {}: dropping connection of discarded media", line.number);
                    }
                },
                Err(e) => log::debug!("line {}: dropping connection, {e}", line.number),
            },
            [b'b', b'=', ..] => {
                let bandwidth = self.src.slice_ref(value);

                match self.scope {
                    Scope::Session => self.session.bandwidth.push(bandwidth),
                    Scope::Media(index) => self.session.media[index].bandwidth.push(bandwidth),
                    Scope::Discarded => {
                        log::debug!("line {}: dropping bandwidth of discarded media", line.number);
                    }
                }
            }
            [b'm', b'=', ..] => match complete(|i| Media::parse(src, i), value) {
                Ok((media, formats)) => {
                    self.session
                        .media
                        .push(MediaDescription::from_media_field(src, media, formats));
                    self.scope = Scope::Media(self.session.media.len() - 1);
                }
                Err(e) => {
                    log::debug!(
                        "line {}: discarding media description, {e}",
                        line.number
                    );
                    self.scope = Scope::Discarded;
                }
            },
            [b'a', b'=', ..] => self.parse_attribute(line, value),
            _ => log::debug!("line {}: dropping unknown field {:?}", line.number, line.text),
        }
    }

    fn parse_attribute(&mut self, line: Line<'s>, attribute: &'s str) {
        let (name, value) = match attribute.split_once(':') {
            Some((name, value)) => (name, Some(value)),
            None => (attribute, None),
        };

        let src: &Bytes = self.src.as_ref();

        match (name, value) {
            ("group", Some(value)) => self.session.group = Some(self.src.slice_ref(value)),
            ("ssrc", Some(value)) => self.session.ssrc.push(self.src.slice_ref(value)),
            ("rtpmap", Some(value)) => match complete(|i| RtpMap::parse(src, i), value) {
                Ok((id, rtpmap)) => {
                    if let Some(payload) = self.payload_mut(line, id) {
                        payload.rtp = Some(rtpmap);
                    }
                }
                Err(e) => log::debug!("line {}: dropping rtpmap, {e}", line.number),
            },
            ("fmtp", Some(value)) => match complete(|i| Fmtp::parse(src, i), value) {
                Ok(fmtp) => {
                    if let Some(payload) = self.payload_mut(line, fmtp.format) {
                        payload.fmtp = Some(fmtp.params);
                    }
                }
                Err(e) => log::debug!("line {}: dropping fmtp, {e}", line.number),
            },
            ("rtcp-fb", Some(value)) => match complete(|i| RtcpFeedback::parse(src, i), value) {
                Ok(RtcpFeedback {
                    pt: RtcpFeedbackPt::Pt(id),
                    value,
                }) => {
                    if let Some(payload) = self.payload_mut(line, id) {
                        payload.rtcp_fb.push(value);
                    }
                }
                Ok(RtcpFeedback {
                    pt: RtcpFeedbackPt::Any,
                    ..
                })
                | Err(_) => self.apply_attribute(line, name, Some(value)),
            },
            _ => self.apply_attribute(line, name, value),
        }
    }

    /// Apply an attribute to the named fields of the current scope
    fn apply_attribute(&mut self, line: Line<'s>, name: &'s str, value: Option<&'s str>) {
        let attributes = match self.scope {
            Scope::Session => &mut self.session.attributes,
            Scope::Media(index) => &mut self.session.media[index].attributes,
            Scope::Discarded => {
                log::debug!("line {}: dropping attribute of discarded media", line.number);
                return;
            }
        };

        let src: &Bytes = self.src.as_ref();

        if let Err(e) = attributes.apply(src, name, value) {
            log::debug!("line {}: keeping malformed a={name} verbatim, {e}", line.number);
            attributes.push_extension(src, name, value);
        }
    }

    /// Find the payload `id` refers to inside the current media description
    fn payload_mut(&mut self, line: Line<'s>, id: u8) -> Option<&mut Payload> {
        let Scope::Media(index) = self.scope else {
            log::debug!(
                "line {}: dropping payload attribute outside of a media description",
                line.number
            );
            return None;
        };

        let payload = self.session.media[index].payload_mut(id);

        if payload.is_none() {
            log::debug!(
                "line {}: dropping attribute of payload {id}, not listed in the media field",
                line.number
            );
        }

        payload
    }
}
