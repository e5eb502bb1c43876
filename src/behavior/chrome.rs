//! Scroll-position arithmetic for the fixed header, the active-nav
//! highlighter, and the hero parallax.

const SCROLLED_THRESHOLD_PX: f64 = 50.0;
const NAV_PROBE_OFFSET_PX: f64 = 100.0;
const PARALLAX_MIN_VIEWPORT_PX: f64 = 768.0;
const PARALLAX_RATE: f64 = 0.15;

/// The header picks up its condensed styling strictly past 50px.
pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Document-space position used to decide which section the reader is
/// in: the top of the viewport, pushed below the fixed header plus a
/// small lead so a section counts as current slightly before its
/// heading reaches the header edge.
pub fn nav_probe_position(scroll_y: f64, header_height: f64) -> f64 {
    scroll_y + header_height + NAV_PROBE_OFFSET_PX
}

/// Measured bounds of one tracked section, in document coordinates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub bottom: f64,
}

/// First section enclosing the probe position wins; `None` when the
/// probe sits between or outside all tracked sections.
pub fn active_section<'a>(probe: f64, sections: &[SectionBounds<'a>]) -> Option<&'a str> {
    sections
        .iter()
        .find(|section| probe >= section.top && probe < section.bottom)
        .map(|section| section.id)
}

/// Vertical shift for the hero image. `None` means the effect is off
/// (narrow viewport, or scrolled past the hero) and any applied
/// transform must be cleared, so a resize cannot strand an offset.
pub fn parallax_shift(scroll_y: f64, viewport_width: f64, hero_height: f64) -> Option<f64> {
    (viewport_width > PARALLAX_MIN_VIEWPORT_PX && scroll_y < hero_height)
        .then(|| scroll_y * PARALLAX_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_boundary_is_exclusive_at_fifty() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(49.9));
        assert!(!header_is_scrolled(50.0));
        assert!(header_is_scrolled(50.1));
        assert!(header_is_scrolled(500.0));
    }

    fn page_sections() -> Vec<SectionBounds<'static>> {
        vec![
            SectionBounds { id: "about", top: 600.0, bottom: 1200.0 },
            SectionBounds { id: "services", top: 1200.0, bottom: 2000.0 },
            SectionBounds { id: "portfolio", top: 2000.0, bottom: 3100.0 },
        ]
    }

    #[test]
    fn probe_inside_a_section_activates_it() {
        assert_eq!(active_section(700.0, &page_sections()), Some("about"));
        assert_eq!(active_section(2500.0, &page_sections()), Some("portfolio"));
    }

    #[test]
    fn section_top_is_inclusive_and_bottom_exclusive() {
        assert_eq!(active_section(1200.0, &page_sections()), Some("services"));
        assert_eq!(active_section(3100.0, &page_sections()), None);
    }

    #[test]
    fn probe_above_all_sections_activates_nothing() {
        assert_eq!(active_section(10.0, &page_sections()), None);
    }

    #[test]
    fn probe_combines_scroll_header_and_lead() {
        assert_eq!(nav_probe_position(500.0, 72.0), 672.0);
    }

    #[test]
    fn parallax_tracks_scroll_inside_the_hero() {
        assert_eq!(parallax_shift(200.0, 1280.0, 800.0), Some(30.0));
        assert_eq!(parallax_shift(0.0, 1280.0, 800.0), Some(0.0));
    }

    #[test]
    fn parallax_clears_on_narrow_viewports() {
        assert_eq!(parallax_shift(200.0, 768.0, 800.0), None);
        assert_eq!(parallax_shift(200.0, 375.0, 800.0), None);
    }

    #[test]
    fn parallax_clears_once_past_the_hero() {
        assert_eq!(parallax_shift(800.0, 1280.0, 800.0), None);
        assert_eq!(parallax_shift(2400.0, 1280.0, 800.0), None);
    }
}
