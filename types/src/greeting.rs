use std::fmt;

use jiff::Zoned;

use crate::config::{CONFIG, GreetingHours};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Pick a greeting for an hour of the local day (0-23).
    pub fn for_hour(hour: i8, hours: GreetingHours) -> Self {
        if hour < hours.afternoon_from {
            Greeting::Morning
        } else if hour < hours.evening_from {
            Greeting::Afternoon
        } else {
            Greeting::Evening
        }
    }

    pub fn now() -> Self {
        Self::for_hour(Zoned::now().hour(), CONFIG.greeting)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        let hours = GreetingHours::default();
        assert_eq!(Greeting::for_hour(0, hours), Greeting::Morning);
        assert_eq!(Greeting::for_hour(11, hours), Greeting::Morning);
        assert_eq!(Greeting::for_hour(12, hours), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(16, hours), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(17, hours), Greeting::Evening);
        assert_eq!(Greeting::for_hour(23, hours), Greeting::Evening);
    }

    #[test]
    fn custom_hours() {
        let hours = GreetingHours {
            afternoon_from: 11,
            evening_from: 18,
        };
        assert_eq!(Greeting::for_hour(11, hours), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(17, hours), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(18, hours).to_string(), "Good evening");
    }
}
