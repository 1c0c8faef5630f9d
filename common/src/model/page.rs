/// Pixel-space rectangle a page is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Viewport for a page of the given intrinsic size (in points) at `scale`.
    pub fn scaled(intrinsic_width: f64, intrinsic_height: f64, scale: f64) -> Self {
        Self {
            width: intrinsic_width * scale,
            height: intrinsic_height * scale,
        }
    }

    /// Integer canvas dimensions. Fractional pixels are dropped, matching how
    /// a canvas truncates assigned widths.
    pub fn canvas_size(&self) -> (u32, u32) {
        (to_pixels(self.width), to_pixels(self.height))
    }
}

fn to_pixels(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// One page drawn onto a surface, ready to be appended to the output.
///
/// Created once per page in page order and never touched again.
#[derive(Debug, Clone)]
pub struct RenderedPage<S> {
    /// 1-based page number within the report.
    pub page_number: u32,
    pub viewport: Viewport,
    pub surface: S,
}
