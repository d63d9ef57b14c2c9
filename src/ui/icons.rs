//! Shared terminal icons.
//!
//! Each icon has a plain-text fallback for terminals without emoji support.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");

// Saved markers
pub static SAVED: Emoji<'_, '_> = Emoji("★ ", "*");
pub static UNSAVED: Emoji<'_, '_> = Emoji("☆ ", " ");

// Page indicators
pub static PAGE: Emoji<'_, '_> = Emoji("📄 ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "->");
