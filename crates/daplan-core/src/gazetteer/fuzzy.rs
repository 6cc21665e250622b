use strsim::levenshtein;

/// The dictionary key closest to `candidate` by edit distance, if any key
/// lies within `max_distance` edits.
///
/// Ties between equidistant keys resolve to the first key in iteration
/// order. The gazetteer's dictionaries preserve file order, so the result
/// is deterministic for a given gazetteer.
pub fn closest_match<'a, I>(candidate: &str, keys: I, max_distance: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&str, usize)> = None;
    for key in keys {
        let distance = levenshtein(candidate, key);
        if distance > max_distance {
            continue;
        }
        if best.map_or(true, |(_, best_distance)| distance < best_distance) {
            best = Some((key, distance));
            if distance == 0 {
                break;
            }
        }
    }
    best.map(|(key, _)| key)
}
