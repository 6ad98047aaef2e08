//! Swipe-to-start slider
//!
//! A track with a handle anchored at its right edge. Dragging the handle
//! leftward past the far end and releasing fires the completion callback.
//! Whatever the outcome, the handle springs back to its resting position.

mod animation;
mod chevron;
mod view;

pub use animation::{Shimmer, Spring, SpringConfig};
pub use chevron::CHEVRONS;
pub use view::SliderView;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Default handle width, in columns
pub const HANDLE_WIDTH: f32 = 12.0;
/// Default gap around the handle, in columns
pub const MARGIN: f32 = 2.0;
/// Default shimmer period
pub const SHIMMER_MS: u64 = 2000;

/// Fixed handle size and the margin separating it from the track edge,
/// both in whole columns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    handle_width: f32,
    margin: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            handle_width: HANDLE_WIDTH,
            margin: MARGIN,
        }
    }
}

impl Geometry {
    /// Rounds both values so drawing and clamping agree on the same columns
    pub fn new(handle_width: f32, margin: f32) -> Self {
        Self {
            handle_width: handle_width.round().max(0.0),
            margin: margin.round().max(0.0),
        }
    }

    pub fn handle_width(&self) -> f32 {
        self.handle_width
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Maximum leftward travel for a track of `track_width`, never negative
    pub fn drag_distance(&self, track_width: f32) -> f32 {
        (track_width - self.handle_width - 2.0 * self.margin).max(0.0)
    }
}

/// Offset for a cumulative displacement `dx`, kept in `[-distance, 0]`
pub fn clamp_offset(dx: f32, distance: f32) -> f32 {
    if dx > 0.0 {
        0.0
    } else if dx < -distance {
        -distance
    } else {
        dx
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Idle,
    Dragging { origin: u16, dx: f32 },
}

/// Result of a finished gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Released past the far end; the callback fired
    Completed,
    /// Released short of the far end
    Cancelled,
}

pub struct SwipeToStart {
    geometry: Geometry,
    track: Rect,
    drag_distance: f32,
    offset: f32,
    spring: Option<Spring>,
    spring_config: SpringConfig,
    gesture: Gesture,
    shimmer: Shimmer,
    on_start: Box<dyn FnMut()>,
}

impl std::fmt::Debug for SwipeToStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeToStart")
            .field("geometry", &self.geometry)
            .field("track", &self.track)
            .field("drag_distance", &self.drag_distance)
            .field("offset", &self.offset)
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

impl SwipeToStart {
    /// Mount a slider. The shimmer starts running immediately.
    pub fn new(on_start: impl FnMut() + 'static) -> Self {
        Self {
            geometry: Geometry::default(),
            track: Rect::default(),
            drag_distance: 0.0,
            offset: 0.0,
            spring: None,
            spring_config: SpringConfig::default(),
            gesture: Gesture::Idle,
            shimmer: Shimmer::new(Instant::now(), Duration::from_millis(SHIMMER_MS)),
            on_start: Box::new(on_start),
        }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self.drag_distance = geometry.drag_distance(self.track.width as f32);
        self
    }

    pub fn with_shimmer_period(mut self, period: Duration) -> Self {
        self.shimmer = Shimmer::new(Instant::now(), period);
        self
    }

    pub fn with_spring(mut self, config: SpringConfig) -> Self {
        self.spring_config = config;
        self
    }

    #[allow(dead_code)]
    pub fn track(&self) -> Rect {
        self.track
    }

    #[allow(dead_code)]
    pub fn drag_distance(&self) -> f32 {
        self.drag_distance
    }

    #[allow(dead_code)]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    #[allow(dead_code)]
    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    /// Current handle offset, always within `[-drag_distance, 0]`
    pub fn offset(&self) -> f32 {
        let raw = self.spring.as_ref().map_or(self.offset, Spring::value);
        if !raw.is_finite() {
            return 0.0;
        }
        raw.clamp(-self.drag_distance, 0.0)
    }

    pub fn shimmer_phase(&self, now: Instant) -> f32 {
        self.shimmer.phase_at(now)
    }

    /// Layout pass: remember the track and recompute the travel distance
    pub fn on_layout(&mut self, track: Rect) {
        if track != self.track {
            tracing::trace!(?track, "Slider track measured");
        }
        self.track = track;
        self.drag_distance = self.geometry.drag_distance(track.width as f32);
        self.offset = self.offset.clamp(-self.drag_distance, 0.0);
    }

    /// Where the handle is drawn right now
    pub fn handle_rect(&self) -> Rect {
        let track = self.track;
        let width = (self.geometry.handle_width() as u16).min(track.width);
        let rest = track.x as f32 + track.width as f32 - self.geometry.margin() - width as f32;
        let x = (rest + self.offset().round()).max(track.x as f32) as u16;

        let margin_rows = if track.height > 2 { 1 } else { 0 };
        Rect {
            x,
            y: track.y + margin_rows,
            width,
            height: track.height.saturating_sub(2 * margin_rows),
        }
    }

    /// Touch-down. Any press on the handle starts a gesture.
    pub fn press(&mut self, column: u16, row: u16) -> bool {
        let handle = self.handle_rect();
        let hit = column >= handle.x
            && column < handle.x + handle.width
            && row >= handle.y
            && row < handle.y + handle.height;
        if !hit {
            return false;
        }

        tracing::debug!(column, "Swipe gesture started");
        self.gesture = Gesture::Dragging {
            origin: column,
            dx: 0.0,
        };
        true
    }

    /// Pointer move while dragging; tracks the pointer 1:1 within bounds
    pub fn drag(&mut self, column: u16) -> bool {
        let Gesture::Dragging { origin, .. } = self.gesture else {
            return false;
        };

        let dx = column as f32 - origin as f32;
        self.gesture = Gesture::Dragging { origin, dx };
        self.spring = None;
        self.offset = clamp_offset(dx, self.drag_distance);
        true
    }

    /// Release. Fires the callback when released past the far end, then
    /// springs the handle back to rest in either case.
    pub fn release(&mut self, column: u16) -> Option<Release> {
        let Gesture::Dragging { origin, .. } = self.gesture else {
            return None;
        };
        self.gesture = Gesture::Idle;

        let dx = column as f32 - origin as f32;
        let outcome = if dx < -self.drag_distance {
            tracing::info!(dx, distance = self.drag_distance, "Swipe completed");
            (self.on_start)();
            Release::Completed
        } else {
            tracing::debug!(dx, distance = self.drag_distance, "Swipe released short");
            Release::Cancelled
        };

        self.spring = Some(Spring::new(self.offset(), 0.0, self.spring_config));
        Some(outcome)
    }

    /// Route a terminal mouse event. Returns true if the slider consumed it.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.press(event.column, event.row),
            MouseEventKind::Drag(MouseButton::Left) => self.drag(event.column),
            MouseEventKind::Up(MouseButton::Left) => self.release(event.column).is_some(),
            _ => false,
        }
    }

    /// Advance the return animation by one frame
    pub fn tick(&mut self, dt: Duration) {
        if let Some(spring) = self.spring.as_mut() {
            if spring.step(dt) || !spring.value().is_finite() {
                self.offset = spring.target();
                self.spring = None;
            }
        }
    }
}
