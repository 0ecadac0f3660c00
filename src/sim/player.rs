//! The runner: posture, vertical motion and death
//!
//! States are `{Standing, Crouching} x {grounded, airborne} x {alive, dead}`.
//! Inputs arrive as edges; the physics collaborator owns integration and
//! reports `grounded` and the last vertical displacement back here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Hitbox};
use crate::consts::*;

/// Crouch/stand sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Posture {
    #[default]
    Standing,
    Crouching,
}

impl Posture {
    pub fn box_size(&self) -> Vec2 {
        match self {
            Posture::Standing => STANDING_BOX_SIZE,
            Posture::Crouching => CROUCH_BOX_SIZE,
        }
    }

    pub fn box_offset(&self) -> Vec2 {
        match self {
            Posture::Standing => STANDING_BOX_OFFSET,
            Posture::Crouching => CROUCH_BOX_OFFSET,
        }
    }
}

/// Animation intents understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    /// Looping run cycle
    Run,
    /// Looping crouched run cycle
    CrouchRun,
    /// Run sheet stopped on frame 0 (mid-air)
    Airborne,
    /// Dedicated hurt texture
    Hurt,
}

impl Pose {
    pub fn key(&self) -> &'static str {
        match self {
            Pose::Run => "run",
            Pose::CrouchRun => "crouch-run",
            Pose::Airborne => "freeze-frame-0",
            Pose::Hurt => "hurt",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Bottom-left of the sprite frame
    pub pos: Vec2,
    pub vel: Vec2,
    pub posture: Posture,
    pub grounded: bool,
    pub alive: bool,
    /// Vertical displacement during the last physics step
    pub last_dy: f32,
    /// Pose most recently sent to the renderer
    pub pose: Option<Pose>,
}

impl Player {
    /// A standing player resting on the floor at `x`
    pub fn on_ground(x: f32, floor_y: f32) -> Self {
        let mut player = Self {
            pos: Vec2::new(x, 0.0),
            vel: Vec2::ZERO,
            posture: Posture::Standing,
            grounded: true,
            alive: true,
            last_dy: 0.0,
            pose: None,
        };
        player.pos.y = player.rest_y(floor_y);
        player
    }

    pub fn box_size(&self) -> Vec2 {
        self.posture.box_size()
    }

    pub fn box_offset(&self) -> Vec2 {
        self.posture.box_offset()
    }

    /// Sprite anchor height that puts the hitbox bottom exactly on `floor_y`
    pub fn rest_y(&self, floor_y: f32) -> f32 {
        floor_y + PLAYER_FRAME_HEIGHT - self.box_offset().y - self.box_size().y
    }

    pub fn is_crouching(&self) -> bool {
        self.posture == Posture::Crouching
    }

    /// Launch upward; only from the ground
    pub fn jump(&mut self, impulse: f32) -> bool {
        if !self.alive || !self.grounded {
            return false;
        }
        self.vel.y = -impulse;
        self.grounded = false;
        true
    }

    /// Shrink to the crouch box; ignored mid-air
    pub fn crouch(&mut self) -> bool {
        if !self.alive || !self.grounded || self.posture == Posture::Crouching {
            return false;
        }
        self.posture = Posture::Crouching;
        true
    }

    /// Restore the standing box; ignored mid-air
    pub fn stand(&mut self) -> bool {
        if !self.alive || !self.grounded || self.posture == Posture::Standing {
            return false;
        }
        self.posture = Posture::Standing;
        true
    }

    /// Pose rule evaluated every running tick
    pub fn desired_pose(&self) -> Pose {
        if self.last_dy != 0.0 {
            Pose::Airborne
        } else if self.box_size().y <= CROUCH_HEIGHT_THRESHOLD {
            Pose::CrouchRun
        } else {
            Pose::Run
        }
    }

    /// Record `pose` as playing; returns it if it differs from the current one
    pub fn play(&mut self, pose: Pose) -> Option<Pose> {
        if self.pose == Some(pose) {
            return None;
        }
        self.pose = Some(pose);
        Some(pose)
    }

    /// Returns false if already dead, so death effects fire once
    pub fn die(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        self.pose = Some(Pose::Hurt);
        true
    }

    /// Back to standing defaults; position is kept
    pub fn reset(&mut self) {
        self.vel = Vec2::ZERO;
        self.alive = true;
        self.posture = Posture::Standing;
        self.last_dy = 0.0;
        self.pose = None;
    }
}

impl Body for Player {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn hitbox(&self) -> Hitbox {
        let frame_top = self.pos.y - PLAYER_FRAME_HEIGHT;
        let offset = self.box_offset();
        Hitbox::new(
            Vec2::new(self.pos.x + offset.x, frame_top + offset.y),
            self.box_size(),
        )
    }
}
