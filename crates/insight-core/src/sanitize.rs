//! Idempotent label sanitization.
//!
//! Runner frameworks hand us display labels that sometimes carry wrapped-value
//! presentation artifacts: a `Optional.empty` marker for an absent value, a
//! bare `Optional` wrapper prefix, and `[`/`]` around the wrapped content.
//! None of those belong in report rows.
//!
//! The replacement pass runs to a fixed point. A single pass is not
//! idempotent: removing one marker can splice the surrounding characters into
//! a new marker (`"OptOptionalional"` becomes `"Optional"` after one pass).
//! Looping until the string stops changing guarantees
//! `sanitize_label(sanitize_label(x)) == sanitize_label(x)` for every input.

/// Marker for an absent wrapped value. Removed entirely, so a label that is
/// nothing but this marker sanitizes to the empty string.
const EMPTY_WRAPPER: &str = "Optional.empty";

/// Generic wrapper marker left in front of wrapped values.
const WRAPPER: &str = "Optional";

/// Strip wrapped-value presentation artifacts from a display label.
///
/// Removes `Optional.empty`, then `Optional`, then `[` and `]`, and repeats
/// until the label no longer changes. Every pass only deletes characters, so
/// the loop terminates.
pub fn sanitize_label(label: &str) -> String {
    let mut current = label.to_owned();
    loop {
        let next = current
            .replace(EMPTY_WRAPPER, "")
            .replace(WRAPPER, "")
            .replace(['[', ']'], "");
        if next == current {
            return next;
        }
        current = next;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
