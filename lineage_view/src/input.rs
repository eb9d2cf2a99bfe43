// Copyright 2026 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pointer button reported with a pointer-down event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button, pen contact, or the host's primary pointer.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Auxiliary,
}

/// Keys the viewport reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Escape.
    Escape,
    /// A printable character; `+`, `=` and `-` zoom.
    Character(char),
}

/// What [`ViewportController::key_down`](crate::ViewportController::key_down)
/// did with a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// The key panned or zoomed the view, or tried to.
    Handled,
    /// `Escape`: the host should leave its edit mode. The viewport itself is
    /// unchanged.
    ExitEditMode,
    /// Not a viewport key.
    Ignored,
}

/// Where a zoom request came from; selects the step size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomSource {
    /// Mouse wheel or trackpad scroll. The step grows with the current zoom.
    Wheel,
    /// `+`/`-` keys; a fixed step.
    Keyboard,
    /// Two-finger pinch; a fixed step per pixel of distance change.
    Pinch,
}

/// Result of a zoom request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomOutcome {
    /// Zoom and pan were committed together.
    Applied,
    /// The rounded change was smaller than the zoom precision.
    BelowPrecision,
    /// The zoom is already at the limit in the requested direction.
    AtLimit,
    /// The delta or focal point was not finite.
    Ignored,
}
