use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("{0}: invalid time slot!")]
pub struct UnknownTimeSlot(pub String);

/// The times of day at which fitness classes are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn name(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "MORNING",
            TimeSlot::Afternoon => "AFTERNOON",
            TimeSlot::Evening => "EVENING",
        }
    }

    fn hour_and_minute(&self) -> (&'static str, &'static str) {
        match self {
            TimeSlot::Morning => ("09", "30"),
            TimeSlot::Afternoon => ("14", "00"),
            TimeSlot::Evening => ("18", "30"),
        }
    }
}

impl FromStr for TimeSlot {
    type Err = UnknownTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTimeSlot(s.to_owned()))
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (hour, minute) = self.hour_and_minute();
        write!(f, "{hour}:{minute}")
    }
}

#[cfg(test)]
mod tests {
    use crate::time_slot::{TimeSlot, UnknownTimeSlot};
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        slot = {TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening},
        expected_result = {"09:30", "14:00", "18:30"}
    )]
    fn should_display_time_slot(slot: TimeSlot, expected_result: &str) {
        assert_eq!(expected_result, slot.to_string());
    }

    #[test]
    fn should_parse_time_slot() {
        assert_eq!(Ok(TimeSlot::Afternoon), "afternoon".parse());
        assert_eq!(
            Err(UnknownTimeSlot("noon".to_owned())),
            "noon".parse::<TimeSlot>()
        );
    }
}
