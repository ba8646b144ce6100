//! LatheKit scene layer: the 2-D control-point editor, the orbit/light drag
//! controller, material state, the Edit/View mode machine, and per-frame
//! primitive batch assembly for the external renderer.

pub mod editor;
pub mod frame;
pub mod input;
pub mod material;
pub mod mode;
pub mod orbit;

pub use editor::ControlPointEditor;
pub use frame::{compose_frame, render_frame, FramePacket};
pub use input::{InputEvent, Key, ParamField};
pub use material::Material;
pub use mode::{Mode, Scene};
pub use orbit::OrbitController;
