//! Abstract input events, decoupled from any windowing API.
//!
//! The host translates its native pointer/keyboard/widget callbacks into
//! these events and feeds them to [`Scene::handle_event`]; dispatch is
//! strictly sequential, so handlers never observe partial state.
//!
//! [`Scene::handle_event`]: crate::mode::Scene::handle_event

/// Keys the scene reacts to. Anything else is dropped by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Modifier selecting light rotation for the next drag gesture.
    Shift,
    /// `>`: dolly the view toward the camera.
    DollyIn,
    /// `<`: dolly the view away from the camera.
    DollyOut,
}

/// Text fields of the configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    SampleCount,
    AngleCount,
}

/// A single input event in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    KeyDown(Key),
    KeyUp(Key),
    FieldChanged { field: ParamField, value: String },
}
