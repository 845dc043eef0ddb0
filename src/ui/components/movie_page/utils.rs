use crate::viewport::LayoutMode;

/// Format a running time in minutes as "Hh Mm"
pub fn format_running_time(minutes: u32) -> String {
    let hours = minutes / 60;
    let remaining_minutes = minutes % 60;
    format!("{}h {}m", hours, remaining_minutes)
}

/// Rendered width of the title text, taken once after the expansive title
/// first mounts.
///
/// The compact title is a full-width block and says nothing about the text
/// width, so measurements taken there are ignored. Later expansive
/// measurements are ignored too, so the width goes stale when the window is
/// resized after mount.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TitleMeasure {
    width: Option<f64>,
}

impl TitleMeasure {
    /// Whether a title mounted in `layout` would still be measured
    pub fn is_pending(&self, layout: LayoutMode) -> bool {
        layout == LayoutMode::Expansive && self.width.is_none()
    }

    /// Returns true if this measurement was kept
    pub fn record(&mut self, layout: LayoutMode, width: f64) -> bool {
        if !self.is_pending(layout) {
            return false;
        }
        self.width = Some(width);
        true
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Inline style pinning an element to the title width; empty until measured
    pub fn width_style(&self) -> String {
        match self.width {
            Some(width) => format!("width: {}px;", width),
            None => String::new(),
        }
    }
}
