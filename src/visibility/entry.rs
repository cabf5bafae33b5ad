use serde::{Deserialize, Serialize};

/// One intersection record, as reported by the underlying observation primitive.
///
/// The browser `IntersectionObserver` reports several fields per record; only the
/// intersecting state is consulted, any other field is ignored when decoding. Field names follow the DOM (`camelCase`) so the
/// records can be deserialized directly from what the observer script sends back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
}
impl IntersectionEntry {
    pub fn intersecting() -> Self {
        Self {
            is_intersecting: true,
        }
    }
    pub fn outside() -> Self {
        Self {
            is_intersecting: false,
        }
    }
}

/// Extra pixels around the viewport that still count as "visible".
///
/// A margin of 200 means the anchor triggers once it comes within 200px of the
/// viewport edge, before it is actually on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TriggerMargin(f64);
impl TriggerMargin {
    /// Negative and non-finite buffers are clamped to zero
    pub fn new(pixels: f64) -> Self {
        if pixels.is_finite() && pixels > 0.0 {
            Self(pixels)
        } else {
            Self(0.0)
        }
    }

    pub fn pixels(self) -> f64 {
        self.0
    }

    /// CSS `rootMargin` string for this margin, applied on every side
    pub fn root_margin(self) -> String {
        format!("{}px", self.0)
    }

    /// Whether an anchor spanning `top..bottom` (viewport coordinates) intersects a
    /// viewport of height `viewport_height` once extended by this margin.
    ///
    /// Used by observation primitives that only report geometry.
    pub fn intersects(self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        bottom >= -self.0 && top <= viewport_height + self.0
    }
}
impl From<f64> for TriggerMargin {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
impl core::fmt::Display for TriggerMargin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_formats_pixels() {
        assert_eq!(TriggerMargin::new(200.0).root_margin(), "200px");
        assert_eq!(TriggerMargin::default().root_margin(), "0px");
        assert_eq!(TriggerMargin::new(12.5).to_string(), "12.5px");
    }

    #[test]
    fn invalid_buffers_clamp_to_zero() {
        assert_eq!(TriggerMargin::new(-10.0).pixels(), 0.0);
        assert_eq!(TriggerMargin::new(f64::NAN).pixels(), 0.0);
        assert_eq!(TriggerMargin::new(f64::INFINITY).pixels(), 0.0);
    }

    #[test]
    fn margin_extends_the_viewport() {
        let margin = TriggerMargin::new(200.0);
        // anchor sits 150px below an 800px viewport
        assert!(margin.intersects(950.0, 1000.0, 800.0));
        // 250px below is still out of reach
        assert!(!margin.intersects(1050.0, 1100.0, 800.0));
        assert!(!TriggerMargin::default().intersects(950.0, 1000.0, 800.0));
    }

    #[test]
    fn entries_deserialize_from_observer_records() {
        let entries: Vec<IntersectionEntry> = serde_json::from_str(
            r#"[{"isIntersecting":true,"intersectionRatio":0.5},{"isIntersecting":false}]"#,
        )
        .unwrap();
        assert_eq!(
            entries,
            vec![IntersectionEntry::intersecting(), IntersectionEntry::outside()]
        );
    }
}
