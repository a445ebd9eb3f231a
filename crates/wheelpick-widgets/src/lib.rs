//! Snapping wheel picker for the wheelpick widget library.

pub mod config;
pub mod sequence;
pub mod snap;
pub mod transform;
pub mod wheel_picker;

pub use config::{AnimationConfig, ConfigError, GestureConfig, StyleConfig, WheelPickerConfig};
pub use sequence::{build_sequence, Sequence, PADDING_COUNT};
pub use snap::{ScrollState, SeekStage, SnapConfig, SnapController, SnapPhase, WheelSelectionChanged};
pub use transform::{transform, ItemTransform};
pub use wheel_picker::{SelectionCallback, WheelPicker};
