//! Scroll detection band for lesson anchors.
//!
//! A lesson counts as "in view" when its heading anchor crosses a thin
//! horizontal band centred in the viewport. The band is expressed as an
//! `IntersectionObserver` root margin that shrinks the viewport from the top
//! and bottom by the same percentage.

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

/// Default band height: the middle 10% of the viewport.
pub const DEFAULT_BAND_PERCENT: u8 = 10;

/// Viewport-centred detection band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionBand {
    height_percent: u8,
}

impl Default for DetectionBand {
    fn default() -> Self {
        Self { height_percent: DEFAULT_BAND_PERCENT }
    }
}

impl DetectionBand {
    /// Band covering `height_percent` of the viewport, clamped to `1..=100`.
    #[must_use]
    pub fn centered(height_percent: u8) -> Self {
        Self { height_percent: height_percent.clamp(1, 100) }
    }

    #[must_use]
    pub fn height_percent(self) -> u8 {
        self.height_percent
    }

    /// Inset applied to both the top and bottom edges, in percent.
    #[must_use]
    pub fn inset_percent(self) -> f64 {
        (100.0 - f64::from(self.height_percent)) / 2.0
    }

    /// CSS root margin for `IntersectionObserverInit`.
    #[must_use]
    pub fn root_margin(self) -> String {
        let inset = self.inset_percent();
        format!("-{inset}% 0px -{inset}% 0px")
    }
}

/// One observer report: the anchor id and whether it is inside the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sighting<'a> {
    pub id: &'a str,
    pub intersecting: bool,
}

/// Pick the lesson an observer batch points at.
///
/// Batches arrive in observation order; the last intersecting anchor wins.
/// Anchors that left the band are ignored.
#[must_use]
pub fn pick_sighted<'a, I>(batch: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Sighting<'a>>,
{
    batch
        .into_iter()
        .filter(|s| s.intersecting && !s.id.is_empty())
        .last()
        .map(|s| s.id)
}
