use crate::constants::*;
use glam::Vec2;

pub struct Camera {
    pub position: Vec2,
    pub zoom: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    target_zoom: f32,
    tracking_target: Option<Vec2>,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: CAMERA_DEFAULT_ZOOM,
            viewport_width,
            viewport_height,
            target_zoom: CAMERA_DEFAULT_ZOOM,
            tracking_target: None,
        }
    }

    pub fn set_tracking_target(&mut self, target: Vec2) {
        self.tracking_target = Some(target);
    }

    /// Center on a board of `width` x `height` cells (each `cell_size` world units
    /// wide, origin at cell (0, 0)) and pick the zoom that fits it, margin included.
    /// Snaps immediately; tracking resumes from there.
    pub fn frame_board(&mut self, width: usize, height: usize, cell_size: f32) {
        let margin = CAMERA_FRAME_MARGIN * 2.0;
        let world_w = (width as f32 + margin) * cell_size;
        let world_h = (height as f32 + margin) * cell_size;

        let center = Vec2::new(
            (width as f32 - 1.0) * 0.5 * cell_size,
            (height as f32 - 1.0) * 0.5 * cell_size,
        );
        let zoom = (self.viewport_width / world_w)
            .min(self.viewport_height / world_h)
            .clamp(CAMERA_MIN_ZOOM, CAMERA_MAX_ZOOM);

        self.position = center;
        self.tracking_target = Some(center);
        self.zoom = zoom;
        self.target_zoom = zoom;
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(target) = self.tracking_target {
            // Smooth interpolation to target position
            let t = 1.0 - CAMERA_TRACKING_SMOOTHING.powf(dt * 60.0);
            self.position += (target - self.position) * t;
        }

        if (self.zoom - self.target_zoom).abs() > f32::EPSILON {
            let t = 1.0 - CAMERA_TRACKING_SMOOTHING.powf(dt * 60.0);
            self.zoom += (self.target_zoom - self.zoom) * t;
        }
    }

    pub fn screen_to_world(&self, screen_x: f32, screen_y: f32) -> Vec2 {
        let ndc_x = (screen_x / self.viewport_width) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen_y / self.viewport_height) * 2.0;

        let world_x = (ndc_x * self.viewport_width) / (2.0 * self.zoom) + self.position.x;
        let world_y = (ndc_y * self.viewport_height) / (2.0 * self.zoom) + self.position.y;

        Vec2::new(world_x, world_y)
    }
}
