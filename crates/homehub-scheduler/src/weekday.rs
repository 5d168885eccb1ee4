//! Weekdays and the repeat-day set of a schedule.

use serde::{Deserialize, Serialize};

/// Day of the week, numbered Sunday = 1 through Saturday = 7.
/// Serialized as that number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Canonical order number (Sunday = 1).
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }

    /// Single-letter label for compact day pickers.
    pub fn initial(self) -> &'static str {
        match self {
            Weekday::Sunday | Weekday::Saturday => "S",
            Weekday::Monday => "M",
            Weekday::Tuesday | Weekday::Thursday => "T",
            Weekday::Wednesday => "W",
            Weekday::Friday => "F",
        }
    }

    fn bit(self) -> u8 {
        1 << (self.number() - 1)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.number()
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.number() == number)
            .ok_or_else(|| format!("weekday must be 1 (Sunday) through 7 (Saturday), got {number}"))
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Set of weekdays a schedule repeats on, stored as a bitmask.
/// An empty set means the schedule fires once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct RepeatDays(u8);

impl RepeatDays {
    const ALL_DAYS: u8 = 0b111_1111;
    const WEEKDAYS: u8 = 0b011_1110;
    const WEEKEND: u8 = 0b100_0001;

    /// Empty set — fire once.
    pub fn once() -> Self {
        Self(0)
    }

    pub fn every_day() -> Self {
        Self(Self::ALL_DAYS)
    }

    /// Monday through Friday.
    pub fn weekdays() -> Self {
        Self(Self::WEEKDAYS)
    }

    /// Saturday and Sunday.
    pub fn weekends() -> Self {
        Self(Self::WEEKEND)
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= day.bit();
    }

    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !day.bit();
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in canonical order, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|d| self.contains(*d))
    }

    /// Human-readable recurrence label.
    pub fn describe(&self) -> String {
        match self.0 {
            0 => "Once".to_string(),
            Self::ALL_DAYS => "Every day".to_string(),
            Self::WEEKEND => "Weekends".to_string(),
            Self::WEEKDAYS => "Weekdays".to_string(),
            _ => self
                .iter()
                .map(Weekday::short_name)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl FromIterator<Weekday> for RepeatDays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut days = Self::once();
        for day in iter {
            days.insert(day);
        }
        days
    }
}

impl From<Vec<Weekday>> for RepeatDays {
    fn from(days: Vec<Weekday>) -> Self {
        days.into_iter().collect()
    }
}

impl From<RepeatDays> for Vec<Weekday> {
    fn from(days: RepeatDays) -> Self {
        days.iter().collect()
    }
}

impl std::fmt::Display for RepeatDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Weekday::*;

    #[test]
    fn test_describe_named_sets() {
        assert_eq!(RepeatDays::once().describe(), "Once");
        assert_eq!(RepeatDays::every_day().describe(), "Every day");
        assert_eq!(RepeatDays::from(vec![Saturday, Sunday]).describe(), "Weekends");
        assert_eq!(
            RepeatDays::from(vec![Monday, Tuesday, Wednesday, Thursday, Friday]).describe(),
            "Weekdays"
        );
    }

    #[test]
    fn test_describe_sorts_by_canonical_order() {
        let days = RepeatDays::from(vec![Friday, Monday, Wednesday]);
        assert_eq!(days.describe(), "Mon, Wed, Fri");

        let days = RepeatDays::from(vec![Saturday, Tuesday, Sunday]);
        assert_eq!(days.describe(), "Sun, Tue, Sat");
    }

    #[test]
    fn test_describe_ignores_insertion_order() {
        let a = RepeatDays::from(vec![Thursday, Sunday]);
        let b = RepeatDays::from(vec![Sunday, Thursday]);
        assert_eq!(a, b);
        assert_eq!(a.describe(), b.describe());
    }

    #[test]
    fn test_duplicates_collapse() {
        let days = RepeatDays::from(vec![Monday, Monday, Monday]);
        assert_eq!(days.len(), 1);
        assert_eq!(days.describe(), "Mon");
    }

    #[test]
    fn test_insert_remove() {
        let mut days = RepeatDays::weekdays();
        days.remove(Friday);
        assert!(!days.contains(Friday));
        assert_eq!(days.describe(), "Mon, Tue, Wed, Thu");
        days.insert(Friday);
        assert_eq!(days, RepeatDays::weekdays());
    }

    #[test]
    fn test_chrono_conversion() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Sat).number(), 7);
        assert_eq!(Thursday.initial(), "T");
    }

    #[test]
    fn test_serializes_as_ordered_numbers() {
        let json = serde_json::to_string(&RepeatDays::weekends()).unwrap();
        assert_eq!(json, "[1,7]");
        let days: RepeatDays = serde_json::from_str("[6,2]").unwrap();
        assert_eq!(days.describe(), "Mon, Fri");
        assert_eq!(serde_json::to_string(&Wednesday).unwrap(), "4");
    }

    #[test]
    fn test_rejects_out_of_range_number() {
        assert!(serde_json::from_str::<Weekday>("0").is_err());
        assert!(serde_json::from_str::<RepeatDays>("[2,8]").is_err());
        assert_eq!(Weekday::try_from(5u8), Ok(Thursday));
    }
}
