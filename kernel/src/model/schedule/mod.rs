use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use thiserror::Error;

use crate::model::id::CourtId;

/// Weekdays a court accepts reservations on, stored as a 7-bit mask
/// (bit 0 = Monday .. bit 6 = Sunday). Never empty by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const ALL: WeekdaySet = WeekdaySet(0b0111_1111);

    /// Builds a set from ISO weekday numbers (1=Monday .. 7=Sunday).
    /// Returns `None` when the input is empty or contains a number
    /// outside 1..=7.
    pub fn from_numbers(days: &[u8]) -> Option<Self> {
        if days.is_empty() {
            return None;
        }
        let mut bits = 0u8;
        for &day in days {
            if !(1..=7).contains(&day) {
                return None;
            }
            bits |= 1 << (day - 1);
        }
        Some(Self(bits))
    }

    pub fn from_bits(bits: i16) -> Option<Self> {
        if bits <= 0 || bits > Self::ALL.0 as i16 {
            return None;
        }
        Some(Self(bits as u8))
    }

    pub fn bits(self) -> i16 {
        self.0 as i16
    }

    pub fn contains(self, weekday: Weekday) -> bool {
        self.0 & (1 << (weekday.number_from_monday() - 1)) != 0
    }

    pub fn numbers(self) -> Vec<u8> {
        (1..=7u8).filter(|d| self.0 & (1 << (d - 1)) != 0).collect()
    }
}

/// One bookable time unit on a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

/// Operating rules for a single court. At most one per court; when a court
/// has none, `default_for` is materialized on first use.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    pub court_id: CourtId,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub slot_duration_minutes: i32,
    pub available_weekdays: WeekdaySet,
    pub min_advance_hours: i32,
    pub max_advance_days: i32,
}

pub const MIN_SLOT_DURATION_MINUTES: i32 = 30;
pub const MAX_SLOT_DURATION_MINUTES: i32 = 240;
pub const MAX_ADVANCE_DAYS_LIMIT: i32 = 365;

/// Why a requested range was rejected. The booking API only needs the
/// boolean, but the reason is kept for diagnostics and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeViolation {
    #[error("the requested range is empty or inverted")]
    EmptyRange,
    #[error("the duration must be a multiple of the {slot_duration_minutes}-minute slot")]
    NotSlotMultiple { slot_duration_minutes: i32 },
    #[error("the court does not operate on the requested weekday")]
    DayNotAvailable,
    #[error("the requested range falls outside the court's opening hours")]
    OutsideOpeningHours,
    #[error("reservations require at least {min_advance_hours} hour(s) of advance notice")]
    TooSoon { min_advance_hours: i32 },
    #[error("reservations can be made at most {max_advance_days} day(s) ahead")]
    TooFarAhead { max_advance_days: i32 },
}

/// Why a configuration is not storable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("the opening time must be before the closing time")]
    OpenNotBeforeClose,
    #[error(
        "the slot duration must be between {MIN_SLOT_DURATION_MINUTES} and \
         {MAX_SLOT_DURATION_MINUTES} minutes"
    )]
    SlotDurationOutOfBounds,
    #[error("the minimum advance notice cannot be negative")]
    NegativeMinAdvance,
    #[error("the maximum advance must be between 1 and {MAX_ADVANCE_DAYS_LIMIT} days")]
    MaxAdvanceOutOfBounds,
}

impl ScheduleConfig {
    /// The configuration synthesized for a court that has never stored one:
    /// open 09:00-22:00, 60-minute slots, every weekday, bookable from one
    /// hour up to 30 days ahead.
    pub fn default_for(court_id: CourtId) -> Self {
        Self {
            court_id,
            open_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            slot_duration_minutes: 60,
            available_weekdays: WeekdaySet::ALL,
            min_advance_hours: 1,
            max_advance_days: 30,
        }
    }

    pub fn ensure_valid(&self) -> Result<(), ConfigViolation> {
        if self.open_time >= self.close_time {
            return Err(ConfigViolation::OpenNotBeforeClose);
        }
        if !(MIN_SLOT_DURATION_MINUTES..=MAX_SLOT_DURATION_MINUTES)
            .contains(&self.slot_duration_minutes)
        {
            return Err(ConfigViolation::SlotDurationOutOfBounds);
        }
        // Weekday non-emptiness is guaranteed by the WeekdaySet constructors.
        if self.min_advance_hours < 0 {
            return Err(ConfigViolation::NegativeMinAdvance);
        }
        if !(1..=MAX_ADVANCE_DAYS_LIMIT).contains(&self.max_advance_days) {
            return Err(ConfigViolation::MaxAdvanceOutOfBounds);
        }
        Ok(())
    }

    /// Enumerates the bookable slots on `date`, lazily. The sequence is a
    /// pure function of the configuration and the date: empty when the
    /// weekday is not available, otherwise slots from the opening time in
    /// `slot_duration_minutes` steps. The last slot may end exactly at the
    /// closing time; no partial trailing slot is produced.
    pub fn slots_on(&self, date: NaiveDate) -> impl Iterator<Item = Slot> + '_ {
        let step = Duration::minutes(self.slot_duration_minutes as i64);
        let available = self.available_weekdays.contains(date.weekday());
        let mut cursor = self.open_time;
        std::iter::from_fn(move || {
            if !available {
                return None;
            }
            let (end, wrapped) = cursor.overflowing_add_signed(step);
            if wrapped != 0 || end > self.close_time {
                return None;
            }
            let slot = Slot {
                starts_at: date.and_time(cursor),
                ends_at: date.and_time(end),
            };
            cursor = end;
            Some(slot)
        })
    }

    /// Validates a requested `[starts_at, ends_at)` range against these
    /// rules, short-circuiting on the first violation. Any exact multiple
    /// of the slot duration is accepted, so multi-slot bookings pass.
    pub fn check_range(
        &self,
        starts_at: NaiveDateTime,
        ends_at: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Result<(), RangeViolation> {
        let duration = ends_at - starts_at;
        if duration <= Duration::zero() {
            return Err(RangeViolation::EmptyRange);
        }
        if duration.num_seconds() % 60 != 0
            || duration.num_minutes() % self.slot_duration_minutes as i64 != 0
        {
            return Err(RangeViolation::NotSlotMultiple {
                slot_duration_minutes: self.slot_duration_minutes,
            });
        }
        if !self.available_weekdays.contains(starts_at.weekday()) {
            return Err(RangeViolation::DayNotAvailable);
        }
        if starts_at.time() < self.open_time || ends_at.time() > self.close_time {
            return Err(RangeViolation::OutsideOpeningHours);
        }
        if starts_at < now + Duration::hours(self.min_advance_hours as i64) {
            return Err(RangeViolation::TooSoon {
                min_advance_hours: self.min_advance_hours,
            });
        }
        if starts_at > now + Duration::days(self.max_advance_days as i64) {
            return Err(RangeViolation::TooFarAhead {
                max_advance_days: self.max_advance_days,
            });
        }
        Ok(())
    }
}
