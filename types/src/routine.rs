//! Static dashboard content: routines, progress tiles and tutorials.

use crate::SkinType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Night,
}

impl TimeOfDay {
    pub fn title(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning Routine",
            TimeOfDay::Night => "Night Routine",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Start your day with glowing skin",
            TimeOfDay::Night => "Repair and rejuvenate overnight",
        }
    }
}

const MORNING: [&str; 4] = [
    "Gentle cleanser",
    "Vitamin C serum",
    "Moisturizer",
    "SPF 30+ sunscreen",
];

const NIGHT: [&str; 4] = [
    "Double cleanse",
    "Exfoliant (2-3x/week)",
    "Retinol serum",
    "Night moisturizer",
];

pub fn routine(time: TimeOfDay) -> &'static [&'static str] {
    match time {
        TimeOfDay::Morning => &MORNING,
        TimeOfDay::Night => &NIGHT,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressKind {
    Water,
    Sleep,
    Sun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTile {
    pub kind: ProgressKind,
    pub label: &'static str,
    pub value: &'static str,
}

pub const PROGRESS: [ProgressTile; 3] = [
    ProgressTile {
        kind: ProgressKind::Water,
        label: "Water Intake",
        value: "6/8",
    },
    ProgressTile {
        kind: ProgressKind::Sleep,
        label: "Sleep Hours",
        value: "7.5h",
    },
    ProgressTile {
        kind: ProgressKind::Sun,
        label: "SPF Applied",
        value: "✓",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tutorial {
    pub title: &'static str,
    pub description: String,
}

pub fn tutorials(skin: SkinType) -> [Tutorial; 2] {
    [
        Tutorial {
            title: "Morning Skincare Routine",
            description: "Step-by-step morning routine guide".into(),
        },
        Tutorial {
            title: "Understanding Your Skin Type",
            description: format!("Learn about {skin} skin characteristics"),
        },
    ]
}

pub fn assistant_intro(skin: SkinType) -> String {
    format!("Hi! I'm your AI skincare assistant. What would you like to know about {skin} skin care?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routines_have_four_steps_in_order() {
        assert_eq!(routine(TimeOfDay::Morning).first(), Some(&"Gentle cleanser"));
        assert_eq!(routine(TimeOfDay::Morning).last(), Some(&"SPF 30+ sunscreen"));
        assert_eq!(routine(TimeOfDay::Night)[1], "Exfoliant (2-3x/week)");
        assert_eq!(routine(TimeOfDay::Night).len(), 4);
    }

    #[test]
    fn tutorials_mention_skin_type() {
        let [first, second] = tutorials(SkinType::Oily);
        assert_eq!(first.title, "Morning Skincare Routine");
        assert_eq!(second.description, "Learn about oily skin characteristics");
    }

    #[test]
    fn assistant_intro_mentions_skin_type() {
        assert!(assistant_intro(SkinType::Dry).contains("about dry skin care?"));
    }
}
