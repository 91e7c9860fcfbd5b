//! Calendar event records, as laid out in the calendar table.
//!
//! Each event is three bytes: a packed little-endian date followed by an
//! action byte.
//!
//! | Bits  | Field                                   |
//! |-------|-----------------------------------------|
//! | 0-3   | month (1-12)                            |
//! | 4-8   | day of month (1-31)                     |
//! | 9-15  | years since 2000, `127` for every year  |

const MONTH_MASK: u16 = 0x000F;
const DAY_SHIFT: u16 = 4;
const DAY_MASK: u16 = 0x01F0;
const YEAR_SHIFT: u16 = 9;
const EVERY_YEAR: u16 = 0x7F;

const CONTROL_MASK: u8 = 0x1F;
const DEMAND_RESET: u8 = 0x20;
const SELF_READ: u8 = 0x40;
const FILLER: u8 = 0x80;

/// Number of seasons and special schedules a calendar can select.
pub const MAX_SCHEDULES: u8 = 12;

/// A validated calendar date. [`CalendarDate::new`] is the only way to
/// build one, so every value fits the packed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    year: Option<u16>,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Years `2000..2127`, or `None` for every year.
    pub fn new(year: Option<u16>, month: u8, day: u8) -> Option<Self> {
        let year_ok = year.map_or(true, |y| (2000..2000 + EVERY_YEAR).contains(&y));

        if year_ok && (1..=12).contains(&month) && (1..=31).contains(&day) {
            Some(Self { year, month, day })
        } else {
            None
        }
    }

    pub fn from_packed(value: u16) -> Option<Self> {
        let month = (value & MONTH_MASK) as u8;
        let day = ((value & DAY_MASK) >> DAY_SHIFT) as u8;
        let year = match value >> YEAR_SHIFT {
            EVERY_YEAR => None,
            offset => Some(2000 + offset),
        };

        Self::new(year, month, day)
    }

    /// `None` for an event that recurs every year.
    pub fn year(&self) -> Option<u16> {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn packed(&self) -> u16 {
        let year = self
            .year
            .and_then(|y| y.checked_sub(2000))
            .filter(|offset| *offset < EVERY_YEAR)
            .unwrap_or(EVERY_YEAR);

        (year << YEAR_SHIFT) | ((self.day as u16) << DAY_SHIFT) | self.month as u16
    }
}

impl core::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.year {
            Some(year) => write!(f, "{year:04}-{:02}-{:02}", self.month, self.day),
            None => write!(f, "every year {:02}-{:02}", self.month, self.day),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarAction {
    None,
    DstOn,
    DstOff,
    /// Switch to season `0..MAX_SCHEDULES`.
    Season(u8),
    /// Use special schedule `0..MAX_SCHEDULES` for the day.
    SpecialSchedule(u8),
    /// A control code without an assigned meaning, `27..=31`.
    Reserved(u8),
}

impl From<u8> for CalendarAction {
    /// Decode the control bits of an action byte. The flag bits are
    /// ignored.
    fn from(value: u8) -> Self {
        let control = value & CONTROL_MASK;

        match control {
            0 => Self::None,
            1 => Self::DstOn,
            2 => Self::DstOff,
            3..=14 => Self::Season(control - 3),
            15..=26 => Self::SpecialSchedule(control - 15),
            v => Self::Reserved(v),
        }
    }
}

impl TryFrom<CalendarAction> for u8 {
    type Error = ();

    /// Fails for schedules past [`MAX_SCHEDULES`] and reserved codes that
    /// name an assigned action.
    fn try_from(value: CalendarAction) -> Result<Self, Self::Error> {
        let control = match value {
            CalendarAction::None => 0,
            CalendarAction::DstOn => 1,
            CalendarAction::DstOff => 2,
            CalendarAction::Season(n) if n < MAX_SCHEDULES => 3 + n,
            CalendarAction::SpecialSchedule(n) if n < MAX_SCHEDULES => 15 + n,
            CalendarAction::Reserved(v @ 27..=31) => v,
            _ => return Err(()),
        };

        Ok(control)
    }
}

/// One entry of the calendar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEvent {
    pub date: CalendarDate,
    pub action: CalendarAction,
    pub demand_reset: bool,
    pub self_read: bool,
    /// Bit 7 of the action byte. It has no meaning but is kept so that an
    /// entry is written back as it was read.
    pub filler: bool,
}

impl CalendarEvent {
    pub const SIZE: usize = 3;

    /// Parse one entry. Returns `None` for an unused (all zero) slot or an
    /// invalid date.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let bytes: [u8; Self::SIZE] = data.get(..Self::SIZE)?.try_into().ok()?;

        let packed = u16::from_le_bytes([bytes[0], bytes[1]]);
        let action = bytes[2];

        if packed == 0 {
            return None;
        }

        Some(Self {
            date: CalendarDate::from_packed(packed)?,
            action: CalendarAction::from(action),
            demand_reset: action & DEMAND_RESET == DEMAND_RESET,
            self_read: action & SELF_READ == SELF_READ,
            filler: action & FILLER == FILLER,
        })
    }

    /// Encode this entry. Returns `None` if the action cannot be
    /// represented in the control bits.
    pub fn to_bytes(&self) -> Option<[u8; Self::SIZE]> {
        let [lo, hi] = self.date.packed().to_le_bytes();

        let mut action = u8::try_from(self.action).ok()?;
        if self.demand_reset {
            action |= DEMAND_RESET;
        }
        if self.self_read {
            action |= SELF_READ;
        }
        if self.filler {
            action |= FILLER;
        }

        Some([lo, hi, action])
    }
}

/// Parse every used entry of a calendar table body.
///
/// Unused and invalid slots are skipped; trailing bytes shorter than an
/// entry are ignored.
pub fn parse_events(data: &[u8]) -> Vec<CalendarEvent> {
    data.chunks_exact(CalendarEvent::SIZE)
        .filter_map(|chunk| {
            let event = CalendarEvent::parse(chunk);
            if event.is_none() && chunk.iter().any(|b| *b != 0) {
                log::debug!("Skipping invalid calendar entry {chunk:02X?}");
            }
            event
        })
        .collect()
}

/// Encode `events` as a calendar table body. Returns `None` if any
/// action cannot be represented.
pub fn encode_events(events: &[CalendarEvent]) -> Option<Vec<u8>> {
    let mut body = Vec::with_capacity(events.len() * CalendarEvent::SIZE);

    for event in events {
        body.extend_from_slice(&event.to_bytes()?);
    }

    Some(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_layout() {
        let date = CalendarDate::new(Some(2024), 3, 10).unwrap();
        assert_eq!(date.packed(), (24 << 9) | (10 << 4) | 3);
        assert_eq!(CalendarDate::from_packed(date.packed()), Some(date));
    }

    #[test]
    fn recurring() {
        let date = CalendarDate::new(None, 12, 25).unwrap();
        assert_eq!(date.packed() >> 9, 0x7F);
        assert_eq!(date.year(), None);
        assert_eq!(date.to_string(), "every year 12-25");
    }

    #[test]
    fn invalid_dates() {
        assert_eq!(CalendarDate::new(Some(2020), 13, 1), None);
        assert_eq!(CalendarDate::new(Some(2020), 1, 0), None);
    }

    #[test]
    fn year_range_edges() {
        assert_eq!(CalendarDate::new(Some(1999), 1, 1), None);
        assert_eq!(CalendarDate::new(Some(2127), 1, 1), None);

        let first = CalendarDate::new(Some(2000), 1, 1).unwrap();
        assert_eq!(first.packed() >> 9, 0);
        assert_eq!(CalendarDate::from_packed(first.packed()), Some(first));

        let last = CalendarDate::new(Some(2126), 12, 31).unwrap();
        assert_eq!(last.packed() >> 9, 126);
        assert_eq!(CalendarDate::from_packed(last.packed()), Some(last));
    }

    #[test]
    fn event_bytes() {
        let event = CalendarEvent {
            date: CalendarDate::new(Some(2001), 6, 1).unwrap(),
            action: CalendarAction::Season(2),
            demand_reset: true,
            self_read: false,
            filler: false,
        };

        let bytes = event.to_bytes().unwrap();
        assert_eq!(bytes[2], 0x20 | 5);
        assert_eq!(CalendarEvent::parse(&bytes), Some(event));
    }

    #[test]
    fn every_action_byte_round_trips() {
        let [lo, hi] = CalendarDate::new(Some(2010), 7, 4).unwrap().packed().to_le_bytes();

        for action in 0..=u8::MAX {
            let bytes = [lo, hi, action];
            let event = CalendarEvent::parse(&bytes).unwrap();

            assert_eq!(event.to_bytes(), Some(bytes), "action 0x{action:02X}");
        }
    }

    #[test]
    fn unrepresentable_actions() {
        for action in [
            CalendarAction::Season(MAX_SCHEDULES),
            CalendarAction::SpecialSchedule(MAX_SCHEDULES),
            CalendarAction::Reserved(5),
            CalendarAction::Reserved(32),
        ] {
            assert_eq!(u8::try_from(action), Err(()), "{action:?}");
        }

        assert_eq!(u8::try_from(CalendarAction::Reserved(27)), Ok(27));

        let event = CalendarEvent {
            date: CalendarDate::new(None, 1, 1).unwrap(),
            action: CalendarAction::Reserved(5),
            demand_reset: false,
            self_read: false,
            filler: false,
        };
        assert_eq!(event.to_bytes(), None);
        assert_eq!(encode_events(&[event]), None);
    }

    #[test]
    fn table_body() {
        let dst = CalendarEvent {
            date: CalendarDate::new(None, 3, 14).unwrap(),
            action: CalendarAction::DstOn,
            demand_reset: false,
            self_read: true,
            filler: false,
        };

        let mut body = encode_events(&[dst]).unwrap();
        body.extend_from_slice(&[0, 0, 0, 0xAA]);

        assert_eq!(parse_events(&body), vec![dst]);
    }
}
