//! Wall-clock conversion between two named IANA time zones.

use std::fmt;

use chrono::{LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{BotError, Result};

/// A date and time pair in some zone's wall clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZonedStamp {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl fmt::Display for ZonedStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M")
        )
    }
}

/// Convert a `YYYY-MM-DD` / `HH:MM` wall-clock reading in `from_zone` into
/// the equivalent wall clock in `to_zone`.
///
/// The source zone's UTC offset is resolved for the given date, so readings
/// on either side of a DST transition convert correctly. An ambiguous local
/// time (the repeated fall-back hour) resolves to the earlier offset; a
/// nonexistent one (the spring-forward gap) is rejected.
pub fn convert(date: &str, time: &str, from_zone: &str, to_zone: &str) -> Result<ZonedStamp> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| BotError::InvalidInput(format!("bad date {date:?}: {e}")))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|e| BotError::InvalidInput(format!("bad time {time:?}: {e}")))?;
    let from = zone(from_zone)?;
    let to = zone(to_zone)?;

    let naive = date.and_time(time);
    let source = match from.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            return Err(BotError::InvalidInput(format!(
                "{naive} does not exist in {from_zone} (DST gap)"
            )));
        }
    };

    let dest = source.with_timezone(&to);
    Ok(ZonedStamp {
        date: dest.date_naive(),
        time: dest.time(),
    })
}

fn zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| BotError::InvalidInput(format!("unknown time zone: {name}")))
}
