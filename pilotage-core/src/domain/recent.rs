use std::collections::HashMap;

use super::Snapshot;

/// How much recent history the display keeps per vessel.
pub const DEFAULT_WINDOW: usize = 8;

/// Retains the most recent `window` snapshots per vessel.
///
/// Vessels keep their first-seen order and snapshots within a vessel are
/// sorted newest first (ties keep their original relative order), so two
/// calls over the same input produce identical output. Grouping goes through
/// an ordered group list with a hash index rather than iterating a map, as
/// map iteration order carries no guarantee.
pub fn recent_snapshots(snapshots: Vec<Snapshot>, window: usize) -> Vec<Snapshot> {
    let mut groups: Vec<Vec<Snapshot>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for snapshot in snapshots {
        match index.get(&snapshot.imo) {
            Some(&at) => groups[at].push(snapshot),
            None => {
                index.insert(snapshot.imo.clone(), groups.len());
                groups.push(vec![snapshot]);
            }
        }
    }

    let mut retained = Vec::new();
    for mut group in groups {
        // Stable sort; an absent capture time ranks oldest.
        group.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));
        group.truncate(window);
        retained.extend(group);
    }
    retained
}

/// True iff `row` carries the newest capture time among the *retained*
/// snapshots of its vessel, not the original unfiltered input.
pub fn is_most_recent(row: &Snapshot, retained: &[Snapshot]) -> bool {
    retained
        .iter()
        .filter(|s| s.imo == row.imo)
        .map(|s| s.captured_at)
        .max()
        .is_some_and(|newest| row.captured_at == newest)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::test_util::{snapshot, ts};

    fn captured(imo: &str, raw: &str) -> Snapshot {
        let mut s = snapshot("PABC", "AXYZ");
        s.imo = imo.into();
        s.captured_at = Some(ts(raw));
        s
    }

    #[test]
    fn keeps_at_most_window_per_vessel() {
        let base = ts("2024-01-01T00:00:00");
        let snapshots: Vec<Snapshot> = (0..12)
            .map(|hour| {
                let mut s = captured("9074729", "2024-01-01T00:00:00");
                s.captured_at = Some(base + Duration::hours(hour));
                s
            })
            .collect();

        let retained = recent_snapshots(snapshots, 8);
        assert_eq!(retained.len(), 8);
        // The four oldest are the ones dropped.
        assert_eq!(retained[0].captured_at, Some(base + Duration::hours(11)));
        assert_eq!(retained[7].captured_at, Some(base + Duration::hours(4)));
    }

    #[test]
    fn sorts_newest_first_within_a_vessel() {
        let snapshots = vec![
            captured("9074729", "2024-01-01T08:00:00"),
            captured("9074729", "2024-01-01T10:00:00"),
            captured("9074729", "2024-01-01T09:00:00"),
        ];

        let retained = recent_snapshots(snapshots, 8);
        let times: Vec<_> = retained.iter().map(|s| s.captured_at.unwrap()).collect();
        assert_eq!(
            times,
            vec![
                ts("2024-01-01T10:00:00"),
                ts("2024-01-01T09:00:00"),
                ts("2024-01-01T08:00:00"),
            ]
        );
    }

    #[test]
    fn capture_time_ties_keep_their_input_order() {
        let mut first = captured("9074729", "2024-01-01T08:00:00");
        first.vessel_name = "FIRST".into();
        let mut second = captured("9074729", "2024-01-01T08:00:00");
        second.vessel_name = "SECOND".into();

        let retained = recent_snapshots(vec![first, second], 8);
        assert_eq!(retained[0].vessel_name, "FIRST");
        assert_eq!(retained[1].vessel_name, "SECOND");
    }

    #[test]
    fn vessels_keep_first_seen_order() {
        let snapshots = vec![
            captured("9074729", "2024-01-01T08:00:00"),
            captured("1234567", "2024-01-01T12:00:00"),
            captured("9074729", "2024-01-01T10:00:00"),
        ];

        let retained = recent_snapshots(snapshots, 8);
        let imos: Vec<_> = retained.iter().map(|s| s.imo.as_str()).collect();
        assert_eq!(imos, vec!["9074729", "9074729", "1234567"]);
    }

    #[test]
    fn absent_capture_times_rank_oldest() {
        let mut missing = captured("9074729", "2024-01-01T08:00:00");
        missing.captured_at = None;
        let snapshots = vec![missing, captured("9074729", "2024-01-01T08:00:00")];

        let retained = recent_snapshots(snapshots, 8);
        assert!(retained[0].captured_at.is_some());
        assert!(retained[1].captured_at.is_none());
    }

    #[test]
    fn most_recent_is_the_later_of_two_an_hour_apart() {
        let older = captured("9074729", "2024-01-01T08:00:00");
        let newer = captured("9074729", "2024-01-01T09:00:00");

        let retained = recent_snapshots(vec![older, newer], 8);
        assert!(is_most_recent(&retained[0], &retained));
        assert!(!is_most_recent(&retained[1], &retained));
        assert_eq!(retained[0].captured_at, Some(ts("2024-01-01T09:00:00")));
    }

    #[test]
    fn most_recent_is_per_vessel_over_the_retained_window() {
        let snapshots = vec![
            captured("9074729", "2024-01-01T08:00:00"),
            captured("1234567", "2024-01-01T06:00:00"),
        ];

        let retained = recent_snapshots(snapshots, 8);
        // Both rows are their vessel's newest even though one is older in
        // absolute terms.
        assert!(is_most_recent(&retained[0], &retained));
        assert!(is_most_recent(&retained[1], &retained));
    }
}
