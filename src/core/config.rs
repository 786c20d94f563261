//! Process-wide stat profile
//!
//! The profile is initialized lazily with the tiered defaults the first time
//! it is requested, or explicitly once at startup with [`set_profile`].

use std::sync::OnceLock;

use crate::profile::StatProfile;

static PROFILE: OnceLock<StatProfile> = OnceLock::new();

/// Get the global stat profile (initializes with the tiered defaults if not set)
pub fn profile() -> &'static StatProfile {
    PROFILE.get_or_init(|| {
        tracing::debug!("Initializing global stat profile with tiered defaults");
        StatProfile::tiered()
    })
}

/// Set the global stat profile (can only be called once)
///
/// Returns Err with the rejected profile if one was already set or the
/// defaults were already initialized by [`profile`].
pub fn set_profile(profile: StatProfile) -> Result<(), StatProfile> {
    PROFILE.set(profile)
}
