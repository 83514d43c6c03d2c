//! Fixed request-path to sporting-event lookup.
//!
//! This table is the single source of truth for which paths count as sport
//! broadcasts. It is total over the paths listed here and undefined (`None`)
//! over every other path the site serves.

/// Path -> event label pairs, in broadcast-schedule order.
const SPORTING_EVENTS: &[(&str, &str)] = &[
    ("/basketball", "Basketball"),
    ("/table-tennis", "Table Tennis"),
    ("/tennis", "Tennis"),
    ("/athletics/track", "Athletics - Track"),
    ("/athletics/field", "Athletics - Field"),
    ("/volleyball", "Volleyball"),
    ("/cycling", "Cycling"),
    ("/diving", "Diving"),
    ("/gymnastics", "Gymnastics"),
    ("/weightlifting", "Weightlifting"),
    ("/rowing", "Rowing"),
    ("/football", "Football"),
    ("/swimming", "Swimming"),
    ("/water-polo", "Water Polo"),
    ("/wrestling", "Wrestling"),
    ("/karate", "Karate"),
    ("/hockey", "Hockey"),
];

/// Event label for a request path, or `None` for non-sport paths.
pub fn sporting_event_for_path(path: &str) -> Option<&'static str> {
    SPORTING_EVENTS
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, label)| *label)
}

/// All known event labels, sorted ascending. Used to populate the event
/// selection widget independent of any loaded data.
pub fn event_labels() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = SPORTING_EVENTS.iter().map(|(_, l)| *l).collect();
    labels.sort_unstable();
    labels
}
