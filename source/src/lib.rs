#[macro_use]
extern crate lazy_static;

pub mod composition_exclusions;
pub mod properties;
pub mod tables;
pub mod texts;
pub mod unicode;

#[cfg(feature = "icu")]
pub mod icu;

pub use normalization_tests::NormalizationTest;
pub use normalization_tests::NORMALIZATION_TESTS;

pub use properties::Codepoint;
pub use properties::PropertiesError;

pub use tables::bundled;
pub use texts::TEXTS;

#[cfg(feature = "icu")]
pub use icu::IcuProperties;
