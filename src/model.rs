use std::fmt;

/// Bikes available for rent at a station. `Unavailable` renders as the
/// literal `N/A` and covers records where the upstream omitted the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    Spaces(i64),
    Unavailable,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Spaces(n) => write!(f, "{}", n),
            Availability::Unavailable => write!(f, "N/A"),
        }
    }
}

/// One upstream entry: a dock's display name and its current availability.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    pub name: String,
    pub available_spaces: Availability,
}

#[derive(Debug, Clone)]
pub struct Api {
    pub api_url: String,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    pub notify_url: String,
    pub token: String,
}
