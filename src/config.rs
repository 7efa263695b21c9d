//! Application configuration.
//!
//! Centralizes the UI-level constants. Domain constants (session key, demo
//! delays, placeholders) live in [`walletdock_core::config`].

use log::LevelFilter;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "EduMarket";

/// Wallet setup guide linked from the connect menu.
pub const WALLET_GUIDE_URL: &str = "/wallet-demo";

// =============================================================================
// Logging
// =============================================================================

/// Console log level.
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

// =============================================================================
// Toast Configuration
// =============================================================================

/// Toast notification settings.
pub mod toast {
    /// How long a toast stays on screen (milliseconds).
    pub const DURATION_MS: u32 = 5000;
    /// Maximum number of toasts shown at once; older ones are dropped.
    pub const MAX_VISIBLE: usize = 3;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
