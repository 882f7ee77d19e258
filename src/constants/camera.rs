//! Camera-related constants.

/// Default zoom level (pixels per grid cell)
pub const CAMERA_DEFAULT_ZOOM: f32 = 32.0;
/// Minimum zoom level
pub const CAMERA_MIN_ZOOM: f32 = 4.0;
/// Maximum zoom level
pub const CAMERA_MAX_ZOOM: f32 = 128.0;
/// Smoothing factor for camera tracking (lower = smoother)
pub const CAMERA_TRACKING_SMOOTHING: f32 = 0.85;
/// Empty cells kept around the board when framing it
pub const CAMERA_FRAME_MARGIN: f32 = 1.0;
