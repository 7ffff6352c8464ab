//! Camera system for interactive 3D viewing.
//!
//! Provides an orthonormal camera frame and two interchangeable
//! manipulators: inspect (orbit around a point of interest) and fly (free
//! first-person movement).

/// Session object owning the frame and both manipulators.
pub mod controller;
/// Camera frame, orientation derivation and re-leveling.
pub mod frame;
/// Inspect and fly manipulators.
pub mod manipulator;

pub use controller::CameraController;
pub use frame::{Basis, CameraFrame, CameraPose, OrientationSnapshot};
pub use manipulator::{
    CameraManipulator, FlyManipulator, GroundFloor, InspectManipulator,
    ManipulatorMode, ManipulatorTuning,
};
