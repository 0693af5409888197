//! Fallback values substituted for missing site description fields.

/// Site name used when the brand has none.
pub const SITE_NAME: &str = "Your Business Name";

/// Default tagline.
pub const TAGLINE: &str = "Your digital presence, perfected.";

/// Default hero description.
pub const DESCRIPTION: &str =
    "A modern digital experience crafted for brands that expect more.";

/// Default about-section body.
pub const ABOUT: &str = "We build considered, high-end digital identities. \
Every detail of your presence is designed, refined, and delivered as one \
coherent experience.";

/// Default page list when none is provided.
pub const PAGES: &[&str] = &["Home", "About", "Services", "Contact"];

/// Default palette: neon cyan / violet / pink.
pub const PRIMARY_COLOR: &str = "#00E5FF";
pub const SECONDARY_COLOR: &str = "#7C4DFF";
pub const ACCENT_COLOR: &str = "#FF4081";
