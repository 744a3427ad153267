//! Display state and geometry for the bar, kept free of DOM concerns so it
//! stays testable without a browser.

use crate::item::TabItem;

/// Placeholder pair shown until the first real declaration arrives.
pub fn bootstrap_items() -> Vec<TabItem> {
    vec![
        TabItem::new("Home", "house.fill"),
        TabItem::new("Selected", "star.fill"),
    ]
}

/// The bar's display list: declared items, or the placeholder pair before
/// any pane has declared one.
#[derive(Clone, Debug, PartialEq)]
pub struct TabStrip {
    items: Vec<TabItem>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self {
            items: bootstrap_items(),
        }
    }

    /// Replaces the display list with the declared one. An empty declaration
    /// pass keeps whatever is currently shown.
    pub fn apply(&mut self, declared: &[TabItem]) {
        if !declared.is_empty() {
            self.items = declared.to_vec();
        }
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}

/// Opacity a pane should take under the shared visibility convention:
/// fully visible when its position matches the selection, invisible otherwise.
pub fn pane_opacity(selected: usize, index: usize) -> f64 {
    if selected == index {
        1.0
    } else {
        0.0
    }
}

/// Position of the sliding highlight inside the bar. Width and offset are
/// percentages of the bar and of the pill itself respectively, so the CSS
/// transition on the pill element animates the move between slots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PillGeometry {
    pub width_pct: f64,
    pub offset_pct: f64,
    /// False when the selection points outside the list; nothing is
    /// highlighted in that case, and nothing errors.
    pub visible: bool,
}

impl PillGeometry {
    pub fn to_style(self) -> String {
        if !self.visible {
            return format!("width: {}%; opacity: 0;", self.width_pct);
        }
        format!(
            "width: {}%; transform: translateX({}%);",
            self.width_pct, self.offset_pct
        )
    }
}

pub fn pill_geometry(selected: usize, count: usize) -> PillGeometry {
    if count == 0 {
        return PillGeometry {
            width_pct: 0.0,
            offset_pct: 0.0,
            visible: false,
        };
    }
    PillGeometry {
        width_pct: 100.0 / count as f64,
        offset_pct: selected as f64 * 100.0,
        visible: selected < count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_items() -> Vec<TabItem> {
        vec![
            TabItem::new("Home", "house.fill"),
            TabItem::new("Selected", "star.fill"),
            TabItem::new("Settings", "gearshape.fill"),
        ]
    }

    #[test]
    fn test_bootstrap_pair() {
        let strip = TabStrip::new();
        let labels: Vec<_> = strip.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(labels, ["Home", "Selected"]);
        let icons: Vec<_> = strip.items().iter().map(|i| i.icon.as_str()).collect();
        assert_eq!(icons, ["house.fill", "star.fill"]);
    }

    #[test]
    fn test_apply_preserves_declaration_order() {
        let declared = three_items();
        let mut strip = TabStrip::new();
        strip.apply(&declared);
        assert_eq!(strip.items(), declared.as_slice());
    }

    #[test]
    fn test_apply_overwrites_bootstrap() {
        let mut strip = TabStrip::new();
        strip.apply(&[TabItem::new("Only", "star.fill")]);
        assert_eq!(strip.len(), 1);
        assert_eq!(strip.items()[0].text, "Only");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let declared = three_items();
        let mut strip = TabStrip::new();
        strip.apply(&declared);
        let first = strip.clone();
        strip.apply(&declared);
        assert_eq!(strip, first);
    }

    #[test]
    fn test_empty_declaration_keeps_current_list() {
        let mut strip = TabStrip::new();
        strip.apply(&[]);
        assert_eq!(strip.len(), 2);

        let declared = three_items();
        strip.apply(&declared);
        strip.apply(&[]);
        assert_eq!(strip.len(), 3);
    }

    #[test]
    fn test_duplicates_are_permitted() {
        let item = TabItem::new("Same", "star.fill");
        let mut strip = TabStrip::new();
        strip.apply(&[item.clone(), item.clone()]);
        assert_eq!(strip.len(), 2);
        assert_eq!(strip.items()[0], strip.items()[1]);
    }

    #[test]
    fn test_pane_opacity() {
        assert_eq!(pane_opacity(0, 0), 1.0);
        assert_eq!(pane_opacity(0, 1), 0.0);
        assert_eq!(pane_opacity(2, 2), 1.0);
        assert_eq!(pane_opacity(7, 2), 0.0);
    }

    #[test]
    fn test_pill_tracks_selection() {
        for selected in 0..3 {
            let pill = pill_geometry(selected, 3);
            assert!(pill.visible);
            assert_eq!(pill.offset_pct, (selected * 100) as f64);
        }
        assert_eq!(pill_geometry(0, 4).width_pct, 25.0);
    }

    #[test]
    fn test_out_of_range_selection_highlights_nothing() {
        let pill = pill_geometry(3, 3);
        assert!(!pill.visible);
        assert!(pill.to_style().contains("opacity: 0"));

        assert!(!pill_geometry(0, 0).visible);
    }

    #[test]
    fn test_extreme_selection_does_not_panic() {
        let pill = pill_geometry(usize::MAX, 3);
        assert!(!pill.visible);
        assert!(pill.to_style().contains("opacity: 0"));
    }

    #[test]
    fn test_three_pane_scenario() {
        let declared = three_items();
        let mut strip = TabStrip::new();
        strip.apply(&declared);

        // initial selection 0: first pane visible, pill on slot 0
        let opacities: Vec<_> = (0..3).map(|i| pane_opacity(0, i)).collect();
        assert_eq!(opacities, [1.0, 0.0, 0.0]);
        assert_eq!(pill_geometry(0, strip.len()).offset_pct, 0.0);

        // tap on item 2: third pane visible, pill slides to slot 2
        let opacities: Vec<_> = (0..3).map(|i| pane_opacity(2, i)).collect();
        assert_eq!(opacities, [0.0, 0.0, 1.0]);
        let pill = pill_geometry(2, strip.len());
        assert!(pill.visible);
        assert_eq!(pill.offset_pct, 200.0);
    }
}
