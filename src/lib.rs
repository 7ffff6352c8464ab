// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive camera control for real-time 3D viewers.
//!
//! viewcam keeps an orthonormal camera frame in world space and drives it
//! with two interchangeable manipulators: **inspect**, which orbits a point
//! of interest, and **fly**, which moves freely in first person.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - owns the frame and both manipulators,
//!   and switches between them
//! - [`camera::CameraFrame`] - the frame itself, with orientation setup,
//!   reset and re-leveling
//! - [`input::InputProcessor`] - turns key, scroll and cursor events into
//!   manipulator calls, once per frame
//! - [`options::Options`] - initial view, sensitivities, key bindings and
//!   window settings, loadable from TOML
//!
//! # Frame order
//!
//! Within one frame the host applies discrete events first
//! ([`input::InputProcessor::handle_event`]), then the continuous update
//! ([`input::InputProcessor::tick`]), then reads the pose with
//! [`camera::CameraController::take_modified`]. With the `viewer` feature,
//! `viewer::Viewer` runs exactly that loop on a winit window.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
