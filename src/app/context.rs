//! Marker window context (pure Rust, no FFI).

use log::debug;

use crate::events::InputEvent;
use crate::handlers::{dispatch_event, Flow, OverlayHost};
use crate::image::{render_marker, PixelBuffer};
use crate::input::drag::DragState;
use crate::model::geometry::centered_origin;
use crate::model::{MarkerStyle, ScreenPoint, ScreenSize};

/// Everything the marker window remembers between messages.
#[derive(Debug)]
pub struct MarkerWindow {
    style: MarkerStyle,
    image: Option<PixelBuffer>,
    origin: ScreenPoint,
    drag: DragState,
}

impl MarkerWindow {
    /// Context for a marker centered on a primary display of `screen` size.
    ///
    /// The image is not rendered yet; call `render` when the window is created.
    pub fn new(mut style: MarkerStyle, screen: ScreenSize) -> Self {
        style.validate();
        let side = style.diameter() as i32;
        let origin = centered_origin(screen, ScreenSize::square(side));
        Self {
            style,
            image: None,
            origin,
            drag: DragState::Idle,
        }
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    /// Window size, equal to the image size.
    pub fn size(&self) -> ScreenSize {
        ScreenSize::square(self.style.diameter() as i32)
    }

    /// Current top-left corner of the window.
    pub fn origin(&self) -> ScreenPoint {
        self.origin
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Render the marker image once and return it. Later calls reuse it.
    pub fn render(&mut self) -> &PixelBuffer {
        let style = &self.style;
        self.image.get_or_insert_with(|| {
            debug!(
                "rendering marker: radius={} color={:?} opacity={}",
                style.radius,
                style.color(),
                style.opacity
            );
            render_marker(style)
        })
    }

    /// The rendered image, if `render` has run.
    pub fn image(&self) -> Option<&PixelBuffer> {
        self.image.as_ref()
    }

    /// Run one input event through the drag logic against `host`.
    pub fn handle_event<H: OverlayHost>(&mut self, host: &mut H, event: &InputEvent) -> Flow {
        let (flow, moved_to) = dispatch_event(&mut self.drag, host, event);
        if let Some(top_left) = moved_to {
            self.origin = top_left;
        }
        flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_window_is_centered_and_idle() {
        let window = MarkerWindow::new(MarkerStyle::default(), ScreenSize::new(1920, 1080));
        assert_eq!(window.origin(), ScreenPoint::new(940, 520));
        assert_eq!(window.size(), ScreenSize::square(40));
        assert_eq!(window.drag_state(), DragState::Idle);
        assert!(window.image().is_none());
    }

    #[test]
    fn test_render_is_cached() {
        let mut window = MarkerWindow::new(MarkerStyle::default(), ScreenSize::new(800, 600));
        let first = window.render().clone();
        assert_eq!(window.render(), &first);
        assert_eq!(window.image(), Some(&first));
    }

    #[test]
    fn test_new_validates_style() {
        let style = MarkerStyle {
            radius: 0,
            opacity: 3.0,
            ..MarkerStyle::default()
        };
        let window = MarkerWindow::new(style, ScreenSize::new(800, 600));
        assert_eq!(window.style().radius, 1);
        assert_eq!(window.style().opacity, 1.0);
    }
}
