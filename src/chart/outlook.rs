use chrono::{Duration, NaiveDateTime};

use crate::domain::weather::HourlyRow;

use super::precip::{PrecipKind, dominant_kind};

/// Upcoming change in precipitation within the scan horizon. Derived on
/// demand from the hourly series; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrecipEvent {
    Starts {
        kind: PrecipKind,
        time: NaiveDateTime,
    },
    Ends {
        kind: PrecipKind,
        time: NaiveDateTime,
    },
    Changes {
        from: PrecipKind,
        to: PrecipKind,
        time: NaiveDateTime,
    },
}

impl PrecipEvent {
    #[must_use]
    pub fn time(&self) -> NaiveDateTime {
        match self {
            PrecipEvent::Starts { time, .. }
            | PrecipEvent::Ends { time, .. }
            | PrecipEvent::Changes { time, .. } => *time,
        }
    }
}

/// Single forward scan from the first row at or after `now`, bounded by a
/// 24-hour horizon. An already-precipitating reference hour looks for the
/// end or a rain/snow flip; a dry one looks for the first onset. Returns
/// `None` when no samples exist at/after `now` or nothing qualifies in the
/// horizon.
#[must_use]
pub fn next_precip_event(rows: &[HourlyRow], now: NaiveDateTime) -> Option<PrecipEvent> {
    let start = rows.partition_point(|row| row.time < now);
    if start >= rows.len() {
        return None;
    }
    let horizon = now + Duration::hours(24);

    match dominant_kind(&rows[start]) {
        Some(current) => {
            for row in &rows[start + 1..] {
                if row.time > horizon {
                    break;
                }
                match dominant_kind(row) {
                    None => {
                        return Some(PrecipEvent::Ends {
                            kind: current,
                            time: row.time,
                        });
                    }
                    Some(kind) if kind != current => {
                        return Some(PrecipEvent::Changes {
                            from: current,
                            to: kind,
                            time: row.time,
                        });
                    }
                    Some(_) => {}
                }
            }
            None
        }
        None => {
            for row in &rows[start..] {
                if row.time > horizon {
                    break;
                }
                if let Some(kind) = dominant_kind(row) {
                    return Some(PrecipEvent::Starts {
                        kind,
                        time: row.time,
                    });
                }
            }
            None
        }
    }
}
