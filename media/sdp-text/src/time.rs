//! Timing fields (`t=`, `r=`, `z=`) and the compact time unit notation they share

use crate::number;
use internal::{IResult, space1};
use nom::character::complete::{digit1, one_of};
use nom::combinator::{map, map_res, opt};
use nom::error::context;
use nom::multi::{many0, separated_list1};
use nom::sequence::{pair, preceded, tuple};
use std::fmt;

const SECONDS_PER_DAY: u64 = 86400;
const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

fn seconds_per_unit(unit: char) -> u64 {
    match unit {
        'd' => SECONDS_PER_DAY,
        'h' => SECONDS_PER_HOUR,
        'm' => SECONDS_PER_MINUTE,
        _ => 1,
    }
}

/// Amount of seconds, optionally suffixed with one of the units `d`, `h`, `m` or `s`
fn typed_time(i: &str) -> IResult<&str, u64> {
    map_res(
        pair(digit1, opt(one_of("dhms"))),
        |(amount, unit): (&str, Option<char>)| {
            amount
                .parse::<u64>()
                .ok()
                .and_then(|amount| amount.checked_mul(unit.map_or(1, seconds_per_unit)))
                .ok_or("time value out of range")
        },
    )(i)
}

/// Signed variant of [`typed_time`], used by time zone offsets
fn signed_typed_time(i: &str) -> IResult<&str, i64> {
    map_res(
        pair(opt(one_of("+-")), typed_time),
        |(sign, seconds): (Option<char>, u64)| {
            i64::try_from(seconds).map(|seconds| if sign == Some('-') { -seconds } else { seconds })
        },
    )(i)
}

/// Displays an amount of seconds using the largest unit which divides it evenly
struct Compact(u64);

impl fmt::Display for Compact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let seconds = self.0;

        if seconds != 0 {
            for (unit, per_unit) in [
                ('d', SECONDS_PER_DAY),
                ('h', SECONDS_PER_HOUR),
                ('m', SECONDS_PER_MINUTE),
            ] {
                if seconds % per_unit == 0 {
                    return write!(f, "{}{unit}", seconds / per_unit);
                }
            }
        }

        write!(f, "{seconds}")
    }
}

/// Time field (`t=`)
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-5.9)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    /// The time, in seconds since January 1 1900 UTC, when the session is supposed to start.
    ///
    /// If 0 is specified the session should start immediately or
    /// whenever the parent signaling protocol signals to.
    pub start: u64,

    /// The time, in seconds since January 1 1900 UTC, when the session is supposed to end.
    ///
    /// If 0 is specified the session will run forever
    /// or until torn down by the parent signaling protocol.
    pub stop: u64,
}

impl Time {
    pub fn parse(i: &str) -> IResult<&str, Self> {
        context(
            "parsing time field",
            map(
                pair(number::<u64>, preceded(space1, number::<u64>)),
                |(start, stop)| Time { start, stop },
            ),
        )(i)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.start, self.stop)
    }
}

/// Repeat times field (`r=`), all values in seconds
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-5.10)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    pub interval: u64,
    pub active_duration: u64,

    /// Offsets from the start time of the session, in order of appearance
    pub offsets: Vec<u64>,
}

impl Repeat {
    pub fn parse(i: &str) -> IResult<&str, Self> {
        context(
            "parsing repeat field",
            map(
                tuple((
                    typed_time,
                    preceded(space1, typed_time),
                    many0(preceded(space1, typed_time)),
                )),
                |(interval, active_duration, offsets)| Repeat {
                    interval,
                    active_duration,
                    offsets,
                },
            ),
        )(i)
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}",
            Compact(self.interval),
            Compact(self.active_duration)
        )?;

        for offset in &self.offsets {
            write!(f, " {}", Compact(*offset))?;
        }

        Ok(())
    }
}

/// Single adjustment of a time zones field (`z=`)
///
/// [RFC8866](https://www.rfc-editor.org/rfc/rfc8866.html#section-5.11)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZone {
    /// Time (same base as [`Time`]) at which the adjustment takes place
    pub adjustment: u64,

    /// Signed offset in seconds
    pub offset: i64,
}

impl TimeZone {
    /// Parse the `<adjustment> <offset>` pairs of a `z=` field.
    ///
    /// A trailing adjustment without offset is consumed and discarded.
    pub fn parse_list(i: &str) -> IResult<&str, Vec<Self>> {
        context(
            "parsing time zones field",
            map(
                pair(
                    separated_list1(
                        space1,
                        map(
                            pair(number::<u64>, preceded(space1, signed_typed_time)),
                            |(adjustment, offset)| TimeZone { adjustment, offset },
                        ),
                    ),
                    opt(preceded(space1, digit1)),
                ),
                |(zones, _unpaired)| zones,
            ),
        )(i)
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.adjustment, self.offset)
    }
}
