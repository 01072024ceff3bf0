//! History log grouping helpers

use maintdesk_domain::{DayGroup, HistoryLog};

/// Group history entries into consecutive calendar-day buckets.
///
/// Entries are ordered by timestamp ascending first; grouping is stable, so
/// same-day entries keep their relative order. Day labels ("today",
/// "yesterday", weekday names) are presentation concerns left to the host.
pub fn group_history_by_day(logs: &[HistoryLog]) -> Vec<DayGroup> {
    let mut sorted: Vec<HistoryLog> = logs.to_vec();
    sorted.sort_by_key(|log| log.date);

    let mut groups: Vec<DayGroup> = Vec::new();
    for log in sorted {
        let day = log.date.date_naive();
        match groups.last_mut() {
            Some(group) if group.day == day => group.logs.push(log),
            _ => groups.push(DayGroup { day, logs: vec![log] }),
        }
    }
    groups
}
