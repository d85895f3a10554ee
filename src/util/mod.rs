//! Small shared utilities.

/// Easing curves for the default camera flight animation.
pub mod easing;
