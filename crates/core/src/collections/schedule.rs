//! Weekly opening hours.
//!
//! Each weekday carries a [`SessionType`] and up to two `HH:MM` intervals.
//! The backend stores the schedule as a flat object keyed by the lowercase
//! weekday (`monday`) and its time fields (`mondayStart`, `mondayEnd`,
//! `mondayStart2`, `mondayEnd2`); [`OpeningHours`] serializes to that shape.

use chrono::Weekday;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Weekdays in display order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lowercase English weekday name used as the schedule key.
pub fn day_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    #[default]
    Closed,
    #[serde(rename = "Single Session")]
    SingleSession,
    #[serde(rename = "Double Session")]
    DoubleSession,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::SingleSession => "Single Session",
            Self::DoubleSession => "Double Session",
        }
    }
}

/// One of the four time fields of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    Start,
    End,
    Start2,
    End2,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 4] = [Self::Start, Self::End, Self::Start2, Self::End2];

    fn suffix(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
            Self::Start2 => "Start2",
            Self::End2 => "End2",
        }
    }

    /// Field key for this slot on `day`, e.g. `mondayStart2`.
    pub fn key(self, day: Weekday) -> String {
        format!("{}{}", day_key(day), self.suffix())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule {
    pub session: SessionType,
    pub start: String,
    pub end: String,
    pub start2: String,
    pub end2: String,
}

impl DaySchedule {
    pub fn time(&self, slot: TimeSlot) -> &str {
        match slot {
            TimeSlot::Start => &self.start,
            TimeSlot::End => &self.end,
            TimeSlot::Start2 => &self.start2,
            TimeSlot::End2 => &self.end2,
        }
    }

    fn time_mut(&mut self, slot: TimeSlot) -> &mut String {
        match slot {
            TimeSlot::Start => &mut self.start,
            TimeSlot::End => &mut self.end,
            TimeSlot::Start2 => &mut self.start2,
            TimeSlot::End2 => &mut self.end2,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session != SessionType::Closed
    }
}

/// Seven [`DaySchedule`]s indexed by weekday. Every day starts closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningHours {
    days: [DaySchedule; 7],
}

impl OpeningHours {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.num_days_from_monday() as usize]
    }

    /// Set the session type of `day`. Closing a day blanks all four time
    /// fields of that day.
    pub fn set_session(&mut self, day: Weekday, session: SessionType) {
        let entry = &mut self.days[day.num_days_from_monday() as usize];
        entry.session = session;
        if session == SessionType::Closed {
            for slot in TimeSlot::ALL {
                entry.time_mut(slot).clear();
            }
        }
    }

    pub fn set_time(&mut self, day: Weekday, slot: TimeSlot, value: impl Into<String>) {
        *self.days[day.num_days_from_monday() as usize].time_mut(slot) = value.into();
    }

    pub fn has_open_day(&self) -> bool {
        self.days.iter().any(DaySchedule::is_open)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        WEEKDAYS.into_iter().zip(self.days.iter())
    }
}

impl Serialize for OpeningHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len() * 5))?;
        for (day, schedule) in self.iter() {
            map.serialize_entry(day_key(day), schedule.session.as_str())?;
            for slot in TimeSlot::ALL {
                map.serialize_entry(&slot.key(day), schedule.time(slot))?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Closed cascade
    // -----------------------------------------------------------------------

    #[test]
    fn closing_a_day_blanks_its_times() {
        let mut hours = OpeningHours::new();
        hours.set_session(Weekday::Mon, SessionType::DoubleSession);
        for slot in TimeSlot::ALL {
            hours.set_time(Weekday::Mon, slot, "09:00");
        }
        hours.set_session(Weekday::Mon, SessionType::Closed);
        for slot in TimeSlot::ALL {
            assert_eq!(hours.day(Weekday::Mon).time(slot), "");
        }
    }

    #[test]
    fn closing_repeatedly_is_idempotent() {
        let mut hours = OpeningHours::new();
        hours.set_session(Weekday::Fri, SessionType::SingleSession);
        hours.set_time(Weekday::Fri, TimeSlot::Start, "08:00");
        hours.set_time(Weekday::Fri, TimeSlot::End, "12:00");
        for _ in 0..3 {
            hours.set_session(Weekday::Fri, SessionType::Closed);
            let day = hours.day(Weekday::Fri);
            assert_eq!(day.session, SessionType::Closed);
            assert!(TimeSlot::ALL.iter().all(|s| day.time(*s).is_empty()));
        }
    }

    #[test]
    fn closing_one_day_leaves_others_alone() {
        let mut hours = OpeningHours::new();
        hours.set_session(Weekday::Tue, SessionType::SingleSession);
        hours.set_time(Weekday::Tue, TimeSlot::Start, "10:00");
        hours.set_session(Weekday::Wed, SessionType::Closed);
        assert_eq!(hours.day(Weekday::Tue).start, "10:00");
    }

    #[test]
    fn switching_to_single_keeps_times() {
        let mut hours = OpeningHours::new();
        hours.set_session(Weekday::Sat, SessionType::DoubleSession);
        hours.set_time(Weekday::Sat, TimeSlot::Start2, "14:00");
        hours.set_session(Weekday::Sat, SessionType::SingleSession);
        assert_eq!(hours.day(Weekday::Sat).start2, "14:00");
    }

    // -----------------------------------------------------------------------
    // Open days / serialization
    // -----------------------------------------------------------------------

    #[test]
    fn default_schedule_has_no_open_day() {
        let mut hours = OpeningHours::new();
        assert!(!hours.has_open_day());
        hours.set_session(Weekday::Sun, SessionType::SingleSession);
        assert!(hours.has_open_day());
    }

    #[test]
    fn serializes_to_flat_object() {
        let mut hours = OpeningHours::new();
        hours.set_session(Weekday::Mon, SessionType::SingleSession);
        hours.set_time(Weekday::Mon, TimeSlot::Start, "09:00");
        hours.set_time(Weekday::Mon, TimeSlot::End, "17:00");

        let json = serde_json::to_value(&hours).unwrap();
        assert_eq!(json["monday"], "Single Session");
        assert_eq!(json["mondayStart"], "09:00");
        assert_eq!(json["mondayEnd"], "17:00");
        assert_eq!(json["mondayStart2"], "");
        assert_eq!(json["sunday"], "Closed");
        assert_eq!(json.as_object().unwrap().len(), 35);
    }

    #[test]
    fn slot_keys() {
        assert_eq!(TimeSlot::Start.key(Weekday::Wed), "wednesdayStart");
        assert_eq!(TimeSlot::End2.key(Weekday::Sun), "sundayEnd2");
    }
}
