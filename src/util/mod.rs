//! Shared utilities for the viewer host loop.

/// Smoothed frame-rate tracking for the status readout.
pub mod frame_timing;
