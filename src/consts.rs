//! shared constants

/// The one storage key; its presence is the sole signal of an active session.
pub const USER_STORAGE_KEY: &str = "fontforge_user";

/// Simulated network round-trip applied to login and signup.
pub const DEFAULT_LATENCY_MS: u64 = 1000;
