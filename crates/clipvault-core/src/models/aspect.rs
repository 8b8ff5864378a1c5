//! Aspect classification for video geometry.
//!
//! The class decides the storage key prefix, so it must be a deterministic,
//! pure function of the probed dimensions.

use serde::{Deserialize, Serialize};

/// Absolute tolerance on the width/height ratio when matching 16:9 or 9:16.
/// Real encoders produce off-by-a-pixel dimensions (e.g. 1920x1082), so
/// exact rational equality is too strict.
const RATIO_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectClass {
    Landscape,
    Portrait,
    Other,
}

impl AspectClass {
    /// Classify probed dimensions: 16:9 within tolerance is landscape,
    /// 9:16 within tolerance is portrait, anything else is other.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return AspectClass::Other;
        }
        let ratio = width as f64 / height as f64;
        if (ratio - 16.0 / 9.0).abs() < RATIO_TOLERANCE {
            AspectClass::Landscape
        } else if (ratio - 9.0 / 16.0).abs() < RATIO_TOLERANCE {
            AspectClass::Portrait
        } else {
            AspectClass::Other
        }
    }

    /// Storage key prefix for this class.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            AspectClass::Landscape => "landscape",
            AspectClass::Portrait => "portrait",
            AspectClass::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_standard_geometries() {
        assert_eq!(
            AspectClass::from_dimensions(1920, 1080),
            AspectClass::Landscape
        );
        assert_eq!(
            AspectClass::from_dimensions(1080, 1920),
            AspectClass::Portrait
        );
        assert_eq!(AspectClass::from_dimensions(1000, 1000), AspectClass::Other);
    }

    #[test]
    fn tolerates_off_by_a_pixel_encodes() {
        assert_eq!(
            AspectClass::from_dimensions(1920, 1082),
            AspectClass::Landscape
        );
        assert_eq!(
            AspectClass::from_dimensions(608, 1080),
            AspectClass::Portrait
        );
    }

    #[test]
    fn classification_is_stable_under_repetition() {
        let first = AspectClass::from_dimensions(1280, 720);
        for _ in 0..100 {
            assert_eq!(AspectClass::from_dimensions(1280, 720), first);
        }
    }

    #[test]
    fn degenerate_dimensions_are_other() {
        assert_eq!(AspectClass::from_dimensions(0, 1080), AspectClass::Other);
        assert_eq!(AspectClass::from_dimensions(1920, 0), AspectClass::Other);
    }

    #[test]
    fn prefixes_match_storage_layout() {
        assert_eq!(AspectClass::Landscape.key_prefix(), "landscape");
        assert_eq!(AspectClass::Portrait.key_prefix(), "portrait");
        assert_eq!(AspectClass::Other.key_prefix(), "other");
    }
}
