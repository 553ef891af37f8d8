//! Wind farm identifier normalization.
//!
//! Source tables and callers disagree on how farms are named (`wf3`, `WP3`, `3`,
//! `wind farm 3`). Every lookup goes through [`normalize_farm_id`] so that all of them
//! converge on the canonical `wp<N>` form.

/// Number of physical sites in the dataset (`wp1`..`wp7`).
pub const KNOWN_FARM_COUNT: usize = 7;

/// Canonical ids of every known farm, in numeric order.
#[must_use]
pub fn known_farms() -> Vec<String> {
    (1..=KNOWN_FARM_COUNT).map(|n| format!("wp{n}")).collect()
}

/// Normalize a farm identifier to its canonical `wp<N>` form.
///
/// Best effort: input with neither a recognized prefix nor any digits is returned
/// lower-cased and trimmed rather than rejected.
#[must_use]
pub fn normalize_farm_id(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    if let Some(rest) = lowered.strip_prefix("wf") {
        return format!("wp{rest}");
    }
    if lowered.starts_with("wp") {
        return lowered;
    }
    match first_digit_run(&lowered) {
        Some(digits) => format!("wp{digits}"),
        None => lowered,
    }
}

/// Farm number of a canonical id (`wp3` -> 3).
#[must_use]
pub fn farm_number(canonical: &str) -> Option<usize> {
    canonical.strip_prefix("wp")?.parse().ok()
}

/// Surface forms under which a canonical id may appear inside a source table.
#[must_use]
pub fn sibling_variants(canonical: &str) -> Vec<String> {
    let mut out = vec![canonical.to_string()];
    if let Some(n) = farm_number(canonical) {
        out.push(format!("wf{n}"));
        out.push(n.to_string());
        out.push(format!("wind farm {n}"));
    }
    out
}

fn first_digit_run(text: &str) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let tail = &text[start..];
    let len = tail
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(tail.len());
    Some(&tail[..len])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn surface_forms_converge_on_canonical_id() {
        for raw in ["WF3", "wf3", "3", "wind farm 3", "  Wind Farm 3  ", "wp3", "WP3"] {
            assert_eq!(normalize_farm_id(raw), "wp3", "input {raw:?}");
        }
        assert_eq!(normalize_farm_id("WF2"), "wp2");
        assert_eq!(normalize_farm_id("wind farm 5"), "wp5");
        assert_eq!(normalize_farm_id("wind_farm_12"), "wp12");
    }

    #[test]
    fn unrecognized_input_degrades_to_itself() {
        assert_eq!(normalize_farm_id("  North Site "), "north site");
        assert_eq!(normalize_farm_id(""), "");
    }

    #[test]
    fn sibling_variants_cover_every_surface_form() {
        assert_eq!(
            sibling_variants("wp4"),
            vec!["wp4", "wf4", "4", "wind farm 4"]
        );
        assert_eq!(sibling_variants("north"), vec!["north"]);
        assert_eq!(farm_number("wp7"), Some(7));
        assert_eq!(farm_number("wf7"), None);
        assert_eq!(known_farms().len(), KNOWN_FARM_COUNT);
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(raw in "\\PC{0,24}") {
            let once = normalize_farm_id(&raw);
            prop_assert_eq!(normalize_farm_id(&once), once.clone());
        }

        #[test]
        fn every_surface_form_of_a_farm_converges(n in 1usize..=99) {
            let canonical = format!("wp{n}");
            for form in [format!("wf{n}"), format!("WF{n}"), n.to_string(), format!("wind farm {n}")] {
                prop_assert_eq!(normalize_farm_id(&form), canonical.clone());
            }
        }
    }
}
