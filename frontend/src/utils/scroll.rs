/// How far the page has been scrolled, as a percentage in `[0, 100]`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Reads the current progress from the browser window.
pub fn current_progress() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let Some(root) = window.document().and_then(|doc| doc.document_element()) else {
        return 0.0;
    };
    let scroll_top = window.page_y_offset().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    scroll_progress(scroll_top, root.scroll_height() as f64, viewport)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfway_down() {
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
    }

    #[test]
    fn clamps_overscroll() {
        assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_pages_report_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }
}
