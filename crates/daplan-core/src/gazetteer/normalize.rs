//! Address normalization against the gazetteer.
//!
//! The register's address column is free text assembled by the PDF
//! renderer. Normalization locates the street inside it, resolves which
//! suburb the street is in (using hundred and suburb hints from the
//! trailing tokens) and appends the canonical `SUBURB STATE POSTCODE`
//! string. Every unmatched case degrades to the best available partial or
//! the original string; this function never fails.

use crate::gazetteer::{fuzzy::closest_match, Gazetteer};
use indexmap::IndexSet;

/// Artifact marker left where the upstream text encodes two interleaved
/// address variants in one run.
pub const INTERLEAVE_MARKER: char = '~';

/// Maximum edits when matching a street name.
const STREET_EDIT_DISTANCE: usize = 1;
/// Maximum edits when matching suburb or hundred names.
const LOCALITY_EDIT_DISTANCE: usize = 2;

/// Directional terrace abbreviations seen in the registers.
const TERRACE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("TCE NTH", "TERRACE NORTH"),
    ("TCE STH", "TERRACE SOUTH"),
    ("TCE EAST", "TERRACE EAST"),
    ("TCE WEST", "TERRACE WEST"),
];

/// Normalize a raw concatenated address against the gazetteer.
///
/// Returns the input unchanged when no street can be located. Note that
/// the function is not idempotent in general: re-running it on an
/// already-suffixed address may append another canonical suburb string.
pub fn normalize_address(raw: &str, gazetteer: &Gazetteer) -> String {
    let address = if raw.contains(INTERLEAVE_MARKER) {
        deinterleave(raw)
    } else {
        raw.to_string()
    };
    let address = expand_terrace_abbreviations(&address);

    let parts: Vec<String> = address
        .split(',')
        .map(|part| part.trim().to_string())
        .collect();

    let Some(street) = locate_street(&parts, gazetteer) else {
        return raw.to_string();
    };
    let suburb = resolve_suburb(&parts[street.part_index + 1..], &street, gazetteer);
    reconstruct(&parts, &street, suburb.as_deref(), gazetteer)
}

/// Rebuild the two interleaved address variants and keep the longer (more
/// complete) one.
fn deinterleave(raw: &str) -> String {
    let mut first: Vec<String> = Vec::new();
    let mut second: Vec<String> = Vec::new();

    for segment in raw.split(',') {
        let segment = segment.trim();
        if !segment.contains(INTERLEAVE_MARKER) {
            first.push(segment.to_string());
            second.push(segment.to_string());
            continue;
        }
        let mut first_tokens: Vec<&str> = Vec::new();
        let mut second_tokens: Vec<&str> = Vec::new();
        for token in segment.split_whitespace() {
            match token.split_once(INTERLEAVE_MARKER) {
                Some((a, b)) => {
                    if !a.is_empty() {
                        first_tokens.push(a);
                    }
                    if !b.is_empty() {
                        second_tokens.push(b);
                    }
                }
                None => {
                    first_tokens.push(token);
                    second_tokens.push(token);
                }
            }
        }
        first.push(first_tokens.join(" "));
        second.push(second_tokens.join(" "));
    }

    let first = first.join(", ");
    let second = second.join(", ");
    if first.len() >= second.len() {
        first
    } else {
        second
    }
}

fn expand_terrace_abbreviations(address: &str) -> String {
    let mut expanded = address.to_string();
    for (abbreviation, full) in TERRACE_ABBREVIATIONS {
        expanded = expanded.replace(abbreviation, full);
    }
    expanded
}

#[derive(Debug)]
struct StreetMatch {
    /// Comma-part the street was found in.
    part_index: usize,
    /// First street token within that part; anything before it is a
    /// lot/section prefix.
    token_start: usize,
    /// Canonical street name from the dictionary.
    name: String,
}

/// Try the comma-parts where the street typically sits: third from the
/// end first, then second, then fourth (shapes like
/// `<prefix>, <street>, <suburb>, <hundred>` with 0-2 extra leading
/// tokens).
fn locate_street(parts: &[String], gazetteer: &Gazetteer) -> Option<StreetMatch> {
    for offset in [3usize, 2, 4] {
        let Some(index) = parts.len().checked_sub(offset) else {
            continue;
        };
        if let Some(m) = match_street_part(index, &parts[index], gazetteer) {
            return Some(m);
        }
    }
    None
}

/// A part holds a street when its trailing 2-4 tokens (suffix expanded)
/// exactly match a street key, or fuzzy-match one within a single edit.
fn match_street_part(
    part_index: usize,
    part: &str,
    gazetteer: &Gazetteer,
) -> Option<StreetMatch> {
    let tokens: Vec<&str> = part.split_whitespace().collect();
    let suffix = tokens.last().and_then(|last| gazetteer.expand_suffix(last));

    // Exact lookup requires a recognized suffix; longest window first so
    // "OLD MAIN STREET" beats "MAIN STREET".
    if suffix.is_some() {
        for take in (2..=4).rev() {
            let Some(candidate) = trailing_candidate(&tokens, take, suffix) else {
                continue;
            };
            if gazetteer.street_suburbs(&candidate).is_some() {
                return Some(StreetMatch {
                    part_index,
                    token_start: tokens.len() - take,
                    name: candidate,
                });
            }
        }
    }

    for take in (2..=4).rev() {
        let Some(candidate) = trailing_candidate(&tokens, take, suffix) else {
            continue;
        };
        if let Some(name) =
            closest_match(&candidate, gazetteer.street_names(), STREET_EDIT_DISTANCE)
        {
            return Some(StreetMatch {
                part_index,
                token_start: tokens.len() - take,
                name: name.to_string(),
            });
        }
    }

    None
}

/// The last `take` tokens joined, with the suffix token replaced by its
/// full form when recognized.
fn trailing_candidate(tokens: &[&str], take: usize, suffix: Option<&str>) -> Option<String> {
    if tokens.len() < take {
        return None;
    }
    let mut window: Vec<&str> = tokens[tokens.len() - take..].to_vec();
    if let (Some(full), Some(last)) = (suffix, window.last_mut()) {
        *last = full;
    }
    Some(window.join(" "))
}

/// Pick the suburb: intersect the street's candidate suburbs with the
/// hundred and suburb hints in the tokens after the street, each hint
/// advisory (an unmatched hint never forces an empty result). Falls back
/// to the street's first known suburb.
fn resolve_suburb(
    remaining: &[String],
    street: &StreetMatch,
    gazetteer: &Gazetteer,
) -> Option<String> {
    let street_suburbs = gazetteer.street_suburbs(&street.name)?;

    let mut signals: Vec<IndexSet<String>> = Vec::new();
    match remaining {
        [] => {}
        [hundred] => {
            if let Some(suburbs) = hundred_signal(hundred, gazetteer) {
                signals.push(suburbs);
            }
        }
        // Two or three trailing tokens: the last is a hundred candidate,
        // the second-to-last is either a second hundred (HD prefix) or a
        // suburb hint. A third leading token is discarded.
        _ => {
            let tail = &remaining[remaining.len() - 2..];
            if let Some(suburbs) = hundred_signal(&tail[1], gazetteer) {
                signals.push(suburbs);
            }
            if let Some(stripped) = tail[0].strip_prefix("HD ") {
                if let Some(suburbs) = hundred_signal(stripped, gazetteer) {
                    signals.push(suburbs);
                }
            } else if let Some(suburb) = closest_match(
                &tail[0],
                gazetteer.suburb_names(),
                LOCALITY_EDIT_DISTANCE,
            ) {
                signals.push(IndexSet::from([suburb.to_string()]));
            }
        }
    }

    street_suburbs
        .iter()
        .find(|suburb| signals.iter().all(|signal| signal.contains(*suburb)))
        .or_else(|| street_suburbs.first())
        .cloned()
}

/// Fuzzy-resolve a hundred-name candidate (with optional `HD ` prefix) to
/// its suburb set.
fn hundred_signal(token: &str, gazetteer: &Gazetteer) -> Option<IndexSet<String>> {
    let name = token.strip_prefix("HD ").unwrap_or(token);
    let key = closest_match(name, gazetteer.hundred_names(), LOCALITY_EDIT_DISTANCE)?;
    gazetteer.hundred_suburbs(key).cloned()
}

/// `<parts before the street> + <prefix tokens + canonical street> +
/// <canonical suburb string>`, comma-joined.
fn reconstruct(
    parts: &[String],
    street: &StreetMatch,
    suburb: Option<&str>,
    gazetteer: &Gazetteer,
) -> String {
    let mut segments: Vec<String> = parts[..street.part_index].to_vec();

    let tokens: Vec<&str> = parts[street.part_index].split_whitespace().collect();
    let prefix = tokens[..street.token_start.min(tokens.len())].join(" ");
    if prefix.is_empty() {
        segments.push(street.name.clone());
    } else {
        segments.push(format!("{prefix} {}", street.name));
    }

    if let Some(suburb) = suburb {
        let canonical = gazetteer.canonical_suburb(suburb).unwrap_or(suburb);
        segments.push(canonical.to_string());
    }

    segments.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gazetteer() -> Gazetteer {
        Gazetteer::from_text(
            concat!(
                "MAIN STREET,PENOLA\n",
                "MAIN STREET,NANGWARRY\n",
                "SMITH TERRACE NORTH,PENOLA\n",
            ),
            "ST,STREET\nTCE,TERRACE\n",
            concat!(
                "PENOLA,PENOLA SA 5277,PENOLA;MONBULLA\n",
                "NANGWARRY,NANGWARRY SA 5277,SHORT\n",
            ),
        )
    }

    #[test]
    fn appends_canonical_suburb() {
        assert_eq!(
            normalize_address("12 MAIN STREET, PENOLA", &gazetteer()),
            "12 MAIN STREET, PENOLA SA 5277"
        );
    }

    #[test]
    fn expands_suffix_abbreviation() {
        assert_eq!(
            normalize_address("12 MAIN ST, PENOLA", &gazetteer()),
            "12 MAIN STREET, PENOLA SA 5277"
        );
    }

    #[test]
    fn tolerates_one_street_edit() {
        assert_eq!(
            normalize_address("12 MAIN STEET, PENOLA", &gazetteer()),
            "12 MAIN STREET, PENOLA SA 5277"
        );
    }

    #[test]
    fn unknown_street_returns_input_unchanged() {
        assert_eq!(
            normalize_address("999 NOWHERE LANE, NOPLACE", &gazetteer()),
            "999 NOWHERE LANE, NOPLACE"
        );
    }

    #[test]
    fn hundred_hint_disambiguates_suburb() {
        assert_eq!(
            normalize_address("12 MAIN ST, HD SHORT", &gazetteer()),
            "12 MAIN STREET, NANGWARRY SA 5277"
        );
    }

    #[test]
    fn unmatched_hundred_is_advisory_only() {
        assert_eq!(
            normalize_address("12 MAIN ST, HD ELSEWHERE", &gazetteer()),
            "12 MAIN STREET, PENOLA SA 5277"
        );
    }

    #[test]
    fn suburb_and_hundred_hints_intersect() {
        assert_eq!(
            normalize_address("LOT 5, MAIN ST, PENOLE, HD MONBULLA", &gazetteer()),
            "LOT 5, MAIN STREET, PENOLA SA 5277"
        );
    }

    #[test]
    fn leading_token_of_three_is_discarded() {
        assert_eq!(
            normalize_address("SEC 100, MAIN ST, IGNORED, NANGWARY, HD SHORT", &gazetteer()),
            "SEC 100, MAIN STREET, NANGWARRY SA 5277"
        );
    }

    #[test]
    fn deinterleaves_on_marker_and_keeps_longer_variant() {
        assert_eq!(
            normalize_address("1~12 MAIN~MAIN ST~STREET, PENOLA", &gazetteer()),
            "12 MAIN STREET, PENOLA SA 5277"
        );
    }

    #[test]
    fn expands_directional_terrace_abbreviation() {
        assert_eq!(
            normalize_address("10 SMITH TCE NTH, PENOLA", &gazetteer()),
            "10 SMITH TERRACE NORTH, PENOLA SA 5277"
        );
    }

    #[test]
    fn not_idempotent_on_its_own_output() {
        let gazetteer = gazetteer();
        let once = normalize_address("12 MAIN ST, HD SHORT", &gazetteer);
        assert_eq!(once, "12 MAIN STREET, NANGWARRY SA 5277");
        // Documented non-property: the second pass no longer sees the
        // hundred hint and falls back to the street's first suburb.
        let twice = normalize_address(&once, &gazetteer);
        assert_ne!(once, twice);
    }
}
