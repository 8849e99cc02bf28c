//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "TintScale";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "tintscale";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "TintScale";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "TINTSCALE_CONFIG_DIR";

/// Base color used when no colors are given.
pub const DEFAULT_BASE_COLOR: &str = "#3B82F6";
