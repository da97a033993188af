//! Chart styling constants and label-area sizing helpers.

use super::scale::AxisBounds;
use plotters::prelude::*;

/// Series accent color for the water-level polyline.
pub const ACCENT: RGBColor = RGBColor(50, 150, 255);
/// Horizontal gridline color.
pub const GRIDLINE: RGBColor = RGBColor(64, 64, 64);

/// Format a level value for the y axis: whole numbers bare, everything else
/// with one decimal.
pub fn format_level(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Compute a tight left label area width (in pixels) from the y labels that
/// will actually appear, clamped to a sensible range.
pub fn compute_left_label_area_px(bounds: &AxisBounds, font_px: u32) -> u32 {
    let mut max_px = 0u32;
    for v in bounds.gridline_values() {
        max_px = max_px.max(estimate_text_width_px(&format_level(v), font_px));
    }
    // Padding for tick marks and a little breathing room.
    max_px.saturating_add(18).clamp(40, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_levels_format_bare() {
        assert_eq!(format_level(20.0), "20");
        assert_eq!(format_level(4.3), "4.3");
    }

    #[test]
    fn label_area_stays_clamped() {
        let b = AxisBounds {
            lower: 6.0,
            upper: 20.0,
            tick_step: 2.0,
        };
        let w = compute_left_label_area_px(&b, 12);
        assert!((40..=100).contains(&w));
    }
}
