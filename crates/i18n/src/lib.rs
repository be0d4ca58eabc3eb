//! Localized text bundles for the storefront.
//!
//! Pure lookup logic: a locale code resolves to a text bundle, and absence
//! always resolves to the designated default bundle. The registry is an
//! explicit value injected by callers, not a module-level table.

pub mod locale;
pub mod texts;

pub use locale::Locale;
pub use texts::{LocaleTexts, MainTexts, TextBundle};
