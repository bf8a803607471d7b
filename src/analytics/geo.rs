//! Views by country and by continent

use super::continent::{continent_of, UNKNOWN};
use crate::event::{EventStore, StoreResult};
use crate::rank::CountTable;

/// Views per country code; events without a country are not counted
pub fn country_counts<S: EventStore + ?Sized>(store: &S) -> StoreResult<CountTable<String>> {
    let events = store.events()?;
    Ok(CountTable::tally(
        events.into_iter().filter_map(|e| e.country.clone()),
    ))
}

/// Views per continent; unknown or missing countries count as "Unknown"
pub fn continent_counts<S: EventStore + ?Sized>(store: &S) -> StoreResult<CountTable<String>> {
    let events = store.events()?;
    Ok(CountTable::tally(events.into_iter().map(|e| {
        e.country
            .as_deref()
            .and_then(continent_of)
            .unwrap_or(UNKNOWN)
            .to_string()
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, EventLog, EventType};

    fn log() -> EventLog {
        vec![
            Event::new("v1", "d1", EventType::Pageview).with_country("GB"),
            Event::new("v2", "d1", EventType::Pageview).with_country("US"),
            Event::new("v3", "d1", EventType::Pageview).with_country("FR"),
            Event::new("v4", "d1", EventType::Pageview).with_country("GB"),
            Event::new("v5", "d1", EventType::Pageview),
            Event::new("v6", "d1", EventType::Pageview).with_country("ZZ"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_country_counts() {
        let counts = country_counts(&log()).unwrap();
        let rows: Vec<(&str, u64)> = counts.iter().map(|(k, c)| (k.as_str(), c)).collect();
        assert_eq!(rows, vec![("GB", 2), ("US", 1), ("FR", 1), ("ZZ", 1)]);
    }

    #[test]
    fn test_continent_counts() {
        let counts = continent_counts(&log()).unwrap();
        let rows: Vec<(&str, u64)> = counts.iter().map(|(k, c)| (k.as_str(), c)).collect();
        assert_eq!(rows, vec![("Europe", 3), ("Unknown", 2), ("North America", 1)]);
    }
}
