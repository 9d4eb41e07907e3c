//! Maps an activity class label to the genres played while doing it.

use std::fmt;

pub const BIKING_GENRES: &str = "pop, rock, hip-hop, heavy-metal";
pub const EATING_GENRES: &str = "jazz, r-n-b, pop";
pub const PLAYING_INSTRUMENT_GENRES: &str = "classical, jazz, piano";
pub const WALKING_GENRES: &str = "folk, country, techno";
pub const DEFAULT_GENRES: &str = "world-music";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Biking,
    Eating,
    PlayingInstrument,
    Walking,
    Other,
}

impl Activity {
    pub fn genre(&self) -> &'static str {
        match self {
            Activity::Biking => BIKING_GENRES,
            Activity::Eating => EATING_GENRES,
            Activity::PlayingInstrument => PLAYING_INSTRUMENT_GENRES,
            Activity::Walking => WALKING_GENRES,
            Activity::Other => DEFAULT_GENRES,
        }
    }

    /// The genre string split into values usable as `seed_genres`.
    pub fn seed_genres(&self) -> Vec<String> {
        self.genre().split(", ").map(String::from).collect()
    }
}

impl From<&str> for Activity {
    fn from(label: &str) -> Self {
        match label {
            "Biking" => Activity::Biking,
            "Eating" => Activity::Eating,
            "Playing Instrument" => Activity::PlayingInstrument,
            "Walking" => Activity::Walking,
            _ => Activity::Other,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Activity::Biking => "Biking",
            Activity::Eating => "Eating",
            Activity::PlayingInstrument => "Playing Instrument",
            Activity::Walking => "Walking",
            Activity::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Returns the genre string for an activity label. Unknown labels map to
/// `"world-music"`.
pub fn genre_type(activity_class: &str) -> &'static str {
    Activity::from(activity_class).genre()
}
