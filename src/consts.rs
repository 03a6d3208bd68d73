//! Shared numeric constants for the zone-view crate.

// ── Facing ──────────────────────────────────────────────────────

/// Rotation basis for token facing, in degrees.
///
/// A facing of 0° points "down" the screen, which is −90° from the
/// mathematical zero direction.
pub const FACING_BASIS_DEG: f64 = -90.0;

// ── Camera ──────────────────────────────────────────────────────

/// Smallest zoom factor accepted by [`crate::camera::Camera::with_zoom`].
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor accepted by [`crate::camera::Camera::with_zoom`].
pub const MAX_ZOOM: f64 = 10.0;

// ── Configuration ───────────────────────────────────────────────

/// Environment variable enabling per-player individual views.
pub const ENV_INDIVIDUAL_VIEWS: &str = "ZONE_VIEW_INDIVIDUAL_VIEWS";

/// Environment variable marking the session as personal (single player).
pub const ENV_PERSONAL_SERVER: &str = "ZONE_VIEW_PERSONAL_SERVER";
