//! Top readers by accumulated read time

use crate::event::{EventStore, StoreResult, VisitorId};
use crate::rank::CountTable;

/// The `n` visitors with the largest summed read time (milliseconds)
///
/// Only `pagereadtime` events count; every other event type is ignored even
/// when it carries a read time.
pub fn top_readers<S: EventStore + ?Sized>(
    store: &S,
    n: usize,
) -> StoreResult<CountTable<VisitorId>> {
    let events = store.events()?;
    let mut totals = CountTable::sum(
        events
            .into_iter()
            .filter(|e| e.is_read_time())
            .map(|e| (e.visitor_id.clone(), e.read_time.unwrap_or(0))),
    );
    totals.truncate(n);
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, EventLog, EventType};

    #[test]
    fn test_only_read_time_events_count() {
        let log: EventLog = vec![
            Event::new("v1", "d1", EventType::Pagereadtime).with_read_time(1_000),
            Event::new("v2", "d1", EventType::Pageview).with_read_time(99_999),
            Event::new("v2", "d2", EventType::Pagereadtime).with_read_time(400),
            Event::new("v1", "d2", EventType::Pagereadtime).with_read_time(500),
            Event::new("v3", "d1", EventType::Read).with_read_time(50_000),
        ]
        .into_iter()
        .collect();

        let top = top_readers(&log, 10).unwrap();
        let rows: Vec<(&str, u64)> = top.iter().map(|(v, t)| (v.as_str(), t)).collect();
        assert_eq!(rows, vec![("v1", 1_500), ("v2", 400)]);
    }

    #[test]
    fn test_top_readers_limit() {
        let log: EventLog = (0..25u64)
            .map(|i| {
                Event::new(format!("v{}", i), "d1", EventType::Pagereadtime).with_read_time(i * 10)
            })
            .collect();

        let top = top_readers(&log, 10).unwrap();
        assert_eq!(top.len(), 10);
        assert_eq!(top.keys().next(), Some(&VisitorId::new("v24")));
        assert_eq!(top.iter().last().map(|(_, t)| t), Some(150));
    }
}
