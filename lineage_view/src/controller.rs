// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `rem_euclid`
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::{ViewportConfig, ViewportConfigError};
use crate::input::{Key, KeyOutcome, PointerButton, ZoomOutcome, ZoomSource};
use crate::pan::PanGesture;
use crate::state::{ViewTransform, ViewportState};
use crate::touch::TouchSet;
use crate::wheel::{WheelAccumulator, WheelStep};

fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// The pan that keeps `focal` over the same canvas point when the zoom
/// changes from `old` to `new` percent.
///
/// A degenerate old or new zoom leaves the pan unchanged.
fn pan_about(pan: Vec2, focal: Point, old: f64, new: f64) -> Vec2 {
    if old <= 0.0 || !old.is_finite() || new <= 0.0 || !new.is_finite() {
        return pan;
    }
    let focal = focal.to_vec2();
    focal - (focal - pan) * (new / old)
}

/// Pan and zoom controller for a diagram canvas.
///
/// `ViewportController` turns raw pointer, touch, wheel, and keyboard input
/// into a [`ViewportState`]. It owns every piece of gesture state (pan
/// snapshots, active touches, wheel accumulation) but no event listeners:
/// the host forwards events and reads back [`state`](Self::state),
/// [`transform`](Self::transform), or [`revision`](Self::revision).
///
/// Every operation that changes the view computes a complete next state and
/// commits it once, bumping the revision once.
#[derive(Clone, Debug)]
pub struct ViewportController {
    config: ViewportConfig,
    view_size: Size,
    state: ViewportState,
    revision: u64,
    canvas: Option<Rect>,
    pan: PanGesture,
    touches: TouchSet,
    pinch_distance: Option<f64>,
    wheel: WheelAccumulator,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl ViewportController {
    /// Creates a controller for a view of `view_size` pixels.
    ///
    /// The view starts at `config.initial_zoom` with no pan.
    pub fn new(view_size: Size, config: ViewportConfig) -> Result<Self, ViewportConfigError> {
        config.validate()?;
        let mut controller = Self {
            config,
            view_size,
            state: ViewportState::new(config.initial_zoom),
            revision: 0,
            canvas: None,
            pan: PanGesture::default(),
            touches: TouchSet::default(),
            pinch_distance: None,
            wheel: WheelAccumulator::default(),
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        controller.rebuild_transforms();
        Ok(controller)
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Replaces the configuration and pulls the zoom into the new range.
    pub fn set_config(&mut self, config: ViewportConfig) -> Result<(), ViewportConfigError> {
        config.validate()?;
        self.config = config;
        let zoom = config.normalize_zoom(self.state.zoom_percent);
        let center = self.view_center();
        self.commit(ViewportState {
            pan: pan_about(self.state.pan, center, self.state.zoom_percent, zoom),
            zoom_percent: zoom,
            ..self.state
        });
        Ok(())
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Current zoom percentage.
    #[must_use]
    pub fn zoom_percent(&self) -> f64 {
        self.state.zoom_percent
    }

    /// Current pan offset in pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.state.pan
    }

    /// Incremented once per committed state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// View size in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view size. Neither pan nor zoom change.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Center of the view in screen coordinates; the default zoom focal point.
    #[must_use]
    pub fn view_center(&self) -> Point {
        self.view_size.to_rect().center()
    }

    /// Moves the view to `pan` without changing the zoom.
    ///
    /// Non-finite offsets are ignored. Returns `true` if the view moved.
    pub fn set_pan(&mut self, pan: Vec2) -> bool {
        if !pan.is_finite() {
            return false;
        }
        self.commit(ViewportState { pan, ..self.state })
    }

    /// Replaces the state with `next`.
    ///
    /// Returns `false` and leaves the revision alone if `next` equals the
    /// current state or is not finite. Callers have already normalized the
    /// zoom.
    fn commit(&mut self, next: ViewportState) -> bool {
        if next == self.state || !next.pan.is_finite() || !next.zoom_percent.is_finite() {
            return false;
        }
        self.state = next;
        self.revision += 1;
        self.rebuild_transforms();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            revision = self.revision,
            zoom = next.zoom_percent,
            pan_x = next.pan.x,
            pan_y = next.pan.y,
            panning = next.is_panning,
            zooming = next.is_zooming,
            "viewport committed"
        );
        true
    }

    /// Reports a finished layout covering `canvas`.
    ///
    /// The first call centers the canvas in the view at the current zoom;
    /// later calls only remember the canvas for [`reset`](Self::reset).
    /// Returns `true` if the view moved.
    pub fn on_layout(&mut self, canvas: Rect) -> bool {
        let first = self.canvas.is_none();
        self.canvas = Some(canvas);
        if !first {
            return false;
        }
        let pan = self.centered_pan(canvas, self.state.zoom_percent);
        self.commit(ViewportState { pan, ..self.state })
    }

    fn centered_pan(&self, canvas: Rect, zoom: f64) -> Vec2 {
        self.view_center().to_vec2() - canvas.center().to_vec2() * (zoom / 100.0)
    }

    /// Changes the zoom by `delta_percent` about `focal` (the view center if
    /// `None`).
    ///
    /// The result is clamped to the zoom range and rounded to the zoom
    /// precision; smaller changes are dropped. The canvas point under `focal`
    /// stays under `focal`.
    pub fn zoom_by(&mut self, delta_percent: f64, focal: Option<Point>) -> ZoomOutcome {
        let focal = focal.unwrap_or_else(|| self.view_center());
        if !delta_percent.is_finite() || !is_finite_point(focal) {
            return ZoomOutcome::Ignored;
        }
        let old = self.state.zoom_percent;
        let target = old + delta_percent;
        let new = self.config.normalize_zoom(target);
        if (new - old).abs() < self.config.zoom_precision * 0.5 {
            let clamped = target < self.config.min_zoom || target > self.config.max_zoom;
            return if clamped {
                ZoomOutcome::AtLimit
            } else {
                ZoomOutcome::BelowPrecision
            };
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(from = old, to = new, focal_x = focal.x, focal_y = focal.y, "zoom");

        self.commit(ViewportState {
            pan: pan_about(self.state.pan, focal, old, new),
            zoom_percent: new,
            ..self.state
        });
        ZoomOutcome::Applied
    }

    /// Zooms by `steps` steps of the size `source` uses.
    ///
    /// Wheel steps are `wheel_base_step * (1 + zoom/100 * 0.5)` percent, so
    /// the wheel moves faster when zoomed in. Keyboard steps are
    /// `keyboard_zoom_step`, and pinch steps are `pinch_sensitivity` per pixel.
    pub fn zoom_step(&mut self, steps: f64, focal: Option<Point>, source: ZoomSource) -> ZoomOutcome {
        let step = match source {
            ZoomSource::Wheel => self.config.wheel_step(self.state.zoom_percent),
            ZoomSource::Keyboard => self.config.keyboard_zoom_step,
            ZoomSource::Pinch => self.config.pinch_sensitivity,
        };
        self.zoom_by(steps * step, focal)
    }

    /// Sets the zoom to `percent` about `focal`.
    pub fn set_zoom(&mut self, percent: f64, focal: Option<Point>) -> ZoomOutcome {
        self.zoom_by(percent - self.state.zoom_percent, focal)
    }

    /// Starts a pan if `button` is the primary button.
    pub fn pointer_down(&mut self, position: Point, button: PointerButton) -> bool {
        if button != PointerButton::Primary || !is_finite_point(position) || self.state.is_zooming {
            return false;
        }
        self.pan.start(position, self.state.pan);
        self.commit(ViewportState {
            is_panning: true,
            ..self.state
        })
    }

    /// Moves an active pointer pan. The pan is unbounded.
    pub fn pointer_move(&mut self, position: Point) -> bool {
        if !is_finite_point(position) || self.state.is_zooming {
            return false;
        }
        match self.pan.pan_for(position) {
            Some(pan) => self.commit(ViewportState { pan, ..self.state }),
            None => false,
        }
    }

    /// Ends an active pointer pan.
    pub fn pointer_up(&mut self) -> bool {
        self.pan.end();
        self.commit(ViewportState {
            is_panning: false,
            ..self.state
        })
    }

    /// A touch contact began.
    ///
    /// The first touch starts a pan; a second one ends the pan and starts a
    /// pinch. Further touches are tracked but ignored.
    pub fn touch_start(&mut self, id: u64, position: Point) -> bool {
        if !is_finite_point(position) {
            return false;
        }
        if !self.touches.insert(id, position) {
            return self.touch_move(id, position);
        }
        match self.touches.len() {
            1 => {
                self.pan.start(position, self.state.pan);
                self.commit(ViewportState {
                    is_panning: true,
                    is_zooming: false,
                    ..self.state
                })
            }
            2 => {
                self.pan.end();
                self.pinch_distance = self.touches.pinch().map(|(distance, _)| distance);
                self.commit(ViewportState {
                    is_panning: false,
                    is_zooming: true,
                    ..self.state
                })
            }
            _ => false,
        }
    }

    /// A touch contact moved.
    ///
    /// While pinching, the change in distance between the first two touches
    /// zooms about their midpoint. Distance changes too small to move the
    /// zoom carry over to the next move.
    pub fn touch_move(&mut self, id: u64, position: Point) -> bool {
        if !is_finite_point(position) || !self.touches.update(id, position) {
            return false;
        }
        if self.state.is_zooming {
            if self.touches.slot_of(id).is_none_or(|slot| slot > 1) {
                return false;
            }
            let Some((distance, midpoint)) = self.touches.pinch() else {
                return false;
            };
            let Some(last) = self.pinch_distance else {
                self.pinch_distance = Some(distance);
                return false;
            };
            let outcome = self.zoom_step(distance - last, Some(midpoint), ZoomSource::Pinch);
            if outcome != ZoomOutcome::BelowPrecision {
                self.pinch_distance = Some(distance);
            }
            return outcome == ZoomOutcome::Applied;
        }
        match self.pan.pan_for(position) {
            Some(pan) if self.touches.len() == 1 => self.commit(ViewportState { pan, ..self.state }),
            _ => false,
        }
    }

    /// A touch contact ended or was cancelled by the platform.
    ///
    /// When a pinch drops to one touch, panning resumes from that touch.
    pub fn touch_end(&mut self, id: u64) -> bool {
        if !self.touches.remove(id) {
            return false;
        }
        match self.touches.len() {
            0 => {
                self.pan.end();
                self.pinch_distance = None;
                self.commit(ViewportState {
                    is_panning: false,
                    is_zooming: false,
                    ..self.state
                })
            }
            1 => {
                self.pinch_distance = None;
                match self.touches.first() {
                    Some(touch) if self.state.is_zooming => {
                        self.pan.start(touch.position, self.state.pan);
                        self.commit(ViewportState {
                            is_panning: true,
                            is_zooming: false,
                            ..self.state
                        })
                    }
                    _ => false,
                }
            }
            _ => {
                self.pinch_distance = self.touches.pinch().map(|(distance, _)| distance);
                false
            }
        }
    }

    /// Feeds one wheel event received at `now_ms`.
    ///
    /// `delta` is the raw vertical wheel delta; positive values scroll away
    /// from the user and zoom out. Events are coalesced: the combined step is
    /// applied once `wheel_coalesce_ms` have passed since the last applied
    /// step or the accumulated units reach `wheel_threshold`. Returns `true`
    /// if the view changed.
    pub fn wheel(&mut self, delta: f64, focal: Point, now_ms: u64) -> bool {
        if !delta.is_finite() || !is_finite_point(focal) {
            return false;
        }
        let units = delta * self.config.wheel_delta_scale;
        match self.wheel.push(
            units,
            focal,
            now_ms,
            self.config.wheel_coalesce_ms,
            self.config.wheel_threshold,
        ) {
            Some(step) => self.apply_wheel(step),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(pending = self.wheel.pending(), "wheel input coalesced");
                false
            }
        }
    }

    /// Applies wheel input still pending once its window has elapsed.
    ///
    /// Call from a frame tick so the last events of a gesture are not held
    /// back until the next wheel event.
    pub fn flush_wheel(&mut self, now_ms: u64) -> bool {
        self.wheel
            .flush(now_ms, self.config.wheel_coalesce_ms)
            .is_some_and(|step| self.apply_wheel(step))
    }

    fn apply_wheel(&mut self, step: WheelStep) -> bool {
        match self.zoom_step(-step.units, Some(step.focal), ZoomSource::Wheel) {
            ZoomOutcome::Applied => true,
            ZoomOutcome::BelowPrecision => {
                self.wheel.restore(step);
                false
            }
            ZoomOutcome::AtLimit | ZoomOutcome::Ignored => false,
        }
    }

    /// Handles a key press.
    ///
    /// Arrows pan by `pan_step`; `+`, `=` and `-` zoom by
    /// `keyboard_zoom_step` about the view center. `Escape` is passed back as
    /// [`KeyOutcome::ExitEditMode`].
    pub fn key_down(&mut self, key: Key) -> KeyOutcome {
        let step = self.config.pan_step;
        let delta = match key {
            Key::ArrowUp => Vec2::new(0.0, step),
            Key::ArrowDown => Vec2::new(0.0, -step),
            Key::ArrowLeft => Vec2::new(step, 0.0),
            Key::ArrowRight => Vec2::new(-step, 0.0),
            Key::Character('+' | '=') => {
                self.zoom_step(1.0, None, ZoomSource::Keyboard);
                return KeyOutcome::Handled;
            }
            Key::Character('-') => {
                self.zoom_step(-1.0, None, ZoomSource::Keyboard);
                return KeyOutcome::Handled;
            }
            Key::Escape => return KeyOutcome::ExitEditMode,
            Key::Character(_) => return KeyOutcome::Ignored,
        };
        self.commit(ViewportState {
            pan: self.state.pan + delta,
            ..self.state
        });
        KeyOutcome::Handled
    }

    /// Offset of a tiled background grid: the pan modulo `grid_cell_size`,
    /// per axis, always in `[0, grid_cell_size)`.
    #[must_use]
    pub fn grid_offset(&self) -> Vec2 {
        let cell = self.config.grid_cell_size;
        Vec2::new(
            self.state.pan.x.rem_euclid(cell),
            self.state.pan.y.rem_euclid(cell),
        )
    }

    /// Current canvas-to-screen transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.state.transform()
    }

    /// Current canvas-to-screen transform as an affine.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.world_to_view
    }

    /// Maps a canvas point to the screen.
    #[must_use]
    pub fn world_to_screen(&self, point: Point) -> Point {
        self.world_to_view * point
    }

    /// Maps a screen point to the canvas.
    #[must_use]
    pub fn screen_to_world(&self, point: Point) -> Point {
        self.view_to_world * point
    }

    /// Canvas area currently visible.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.view_to_world
            .transform_rect_bbox(self.view_size.to_rect())
    }

    /// Zooms and pans so that `rect` fills the view with `margin` pixels to
    /// spare on every side, centered.
    ///
    /// Empty rects and an empty view are ignored.
    pub fn fit_rect(&mut self, rect: Rect, margin: f64) -> bool {
        let margin = if margin.is_finite() { margin.max(0.0) } else { 0.0 };
        let avail = Size::new(
            self.view_size.width - 2.0 * margin,
            self.view_size.height - 2.0 * margin,
        );
        if rect.width() <= 0.0 || rect.height() <= 0.0 || avail.width <= 0.0 || avail.height <= 0.0
        {
            return false;
        }
        let fit = (avail.width / rect.width()).min(avail.height / rect.height()) * 100.0;
        let zoom = self.config.normalize_zoom(fit);
        self.commit(ViewportState {
            pan: self.centered_pan(rect, zoom),
            zoom_percent: zoom,
            ..self.state
        })
    }

    /// Returns to the initial zoom, centered on the last layout, and ends
    /// every gesture.
    pub fn reset(&mut self) -> bool {
        self.clear_gestures();
        let zoom = self.config.initial_zoom;
        let pan = self
            .canvas
            .map_or(Vec2::ZERO, |canvas| self.centered_pan(canvas, zoom));
        self.commit(ViewportState {
            pan,
            ..ViewportState::new(zoom)
        })
    }

    /// Drops every in-progress gesture and pending wheel input.
    ///
    /// Call on pointer-cancel and when the view is torn down; pan and zoom
    /// are kept.
    pub fn cancel_interactions(&mut self) -> bool {
        self.clear_gestures();
        self.commit(ViewportState {
            is_panning: false,
            is_zooming: false,
            ..self.state
        })
    }

    fn clear_gestures(&mut self) {
        self.pan.end();
        self.touches.clear();
        self.pinch_distance = None;
        self.wheel.clear();
    }

    /// Snapshot of the controller for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            view_size: self.view_size,
            state: self.state,
            revision: self.revision,
            visible_world_rect: self.visible_world_rect(),
            grid_offset: self.grid_offset(),
            touch_count: self.touches.len(),
            pending_wheel_units: self.wheel.pending(),
            min_zoom: self.config.min_zoom,
            max_zoom: self.config.max_zoom,
        }
    }

    fn rebuild_transforms(&mut self) {
        self.world_to_view = self.state.transform().to_affine();
        self.view_to_world = self.world_to_view.inverse();
    }
}

/// Debug snapshot of a [`ViewportController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// View size in pixels.
    pub view_size: Size,
    /// Committed state.
    pub state: ViewportState,
    /// Number of commits so far.
    pub revision: u64,
    /// Canvas area currently visible.
    pub visible_world_rect: Rect,
    /// Background grid offset.
    pub grid_offset: Vec2,
    /// Active touch contacts.
    pub touch_count: usize,
    /// Wheel units waiting to be applied.
    pub pending_wheel_units: f64,
    /// Smallest zoom percentage.
    pub min_zoom: f64,
    /// Largest zoom percentage.
    pub max_zoom: f64,
}
