//! Interactive view state: zoom level and item selection.

use super::ZoomConfig;

/// Current zoom factor, clamped to a [`ZoomConfig`]'s bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Zoom {
    level: f64,
    bounds: ZoomConfig,
}

impl Zoom {
    /// Starts at 1.0 (clamped into bounds).
    ///
    /// Swapped bounds (`min > max`) are reordered.
    pub fn new(bounds: ZoomConfig) -> Self {
        let bounds = ZoomConfig {
            min: bounds.min.min(bounds.max),
            max: bounds.min.max(bounds.max),
            step: bounds.step,
        };
        let mut zoom = Self { level: 1.0, bounds };
        zoom.set(1.0);
        zoom
    }

    /// Current factor.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Sets the factor, clamped into bounds.
    pub fn set(&mut self, level: f64) {
        self.level = level.max(self.bounds.min).min(self.bounds.max);
    }

    /// Multiplies by the step, capped at the max.
    pub fn zoom_in(&mut self) {
        self.level = (self.level * self.bounds.step).min(self.bounds.max);
    }

    /// Divides by the step, floored at the min.
    pub fn zoom_out(&mut self) {
        self.level = (self.level / self.bounds.step).max(self.bounds.min);
    }

    /// Whether the factor is below the max.
    pub fn can_zoom_in(&self) -> bool {
        self.level < self.bounds.max
    }

    /// Whether the factor is above the min.
    pub fn can_zoom_out(&self) -> bool {
        self.level > self.bounds.min
    }

    /// Factor as a rounded percentage (1.0 → 100).
    pub fn percent(&self) -> u32 {
        (self.level * 100.0).round() as u32
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

/// Id of the item whose details are shown, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `id`, or clears the selection if `id` is already selected.
    pub fn toggle(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }

    /// Drops the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Currently selected id.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether `id` is the selected item.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps() {
        let mut z = Zoom::default();
        assert_eq!(z.percent(), 100);
        z.zoom_in();
        assert_eq!(z.percent(), 120);
        z.zoom_in();
        assert_eq!(z.percent(), 144);
        z.zoom_out();
        z.zoom_out();
        assert_eq!(z.percent(), 100);
    }

    #[test]
    fn test_zoom_clamps() {
        let mut z = Zoom::default();
        for _ in 0..20 {
            z.zoom_in();
        }
        assert!((z.level() - 3.0).abs() < 1e-10);
        assert!(!z.can_zoom_in());
        assert!(z.can_zoom_out());

        for _ in 0..40 {
            z.zoom_out();
        }
        assert!((z.level() - 0.3).abs() < 1e-10);
        assert!(!z.can_zoom_out());
        assert_eq!(z.percent(), 30);
    }

    #[test]
    fn test_zoom_set_and_narrow_bounds() {
        let mut z = Zoom::default();
        z.set(10.0);
        assert!((z.level() - 3.0).abs() < 1e-10);

        let narrow = Zoom::new(ZoomConfig {
            min: 1.5,
            max: 2.0,
            step: 1.1,
        });
        assert!((narrow.level() - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_zoom_from_partial_config_with_swapped_bounds() {
        // min keeps its 0.3 default, so max ends up below min
        let cfg: crate::layout::LayoutConfig =
            serde_json::from_str(r#"{"zoom": {"max": 0.2}}"#).unwrap();
        let mut z = Zoom::new(cfg.zoom);
        assert!((z.level() - 0.3).abs() < 1e-10);

        for _ in 0..5 {
            z.zoom_out();
        }
        assert!((z.level() - 0.2).abs() < 1e-10);
        assert!(!z.can_zoom_out());
        z.set(5.0);
        assert!((z.level() - 0.3).abs() < 1e-10);
        z.zoom_in();
        assert!((z.level() - 0.3).abs() < 1e-10);
        assert!(!z.can_zoom_in());
    }

    #[test]
    fn test_selection_toggle() {
        let mut s = Selection::new();
        assert!(s.selected().is_none());

        s.toggle("3");
        assert_eq!(s.selected(), Some("3"));
        assert!(s.is_selected("3"));

        s.toggle("5");
        assert_eq!(s.selected(), Some("5"));

        s.toggle("5");
        assert!(s.selected().is_none());

        s.toggle("1");
        s.clear();
        assert!(!s.is_selected("1"));
    }
}
