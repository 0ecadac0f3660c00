//! Minimal arcade physics collaborator
//!
//! Integrates the player under gravity, keeps it inside the world, and
//! reports overlaps as contacts. The core only reacts to those contacts;
//! a host with its own physics engine can skip this module and feed
//! contacts to `collision::handle_contact` directly.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::player::Player;
use super::state::{Obstacle, StartTrigger};

/// A reported overlap between the player and another body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Trigger,
    Obstacle(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcadePhysics {
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    pub world_width: f32,
    /// Bottom of the world; bodies rest on it
    pub floor_y: f32,
    paused: bool,
}

impl ArcadePhysics {
    pub fn new(gravity: f32, world_width: f32, floor_y: f32) -> Self {
        Self {
            gravity,
            world_width,
            floor_y,
            paused: false,
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance the player by `dt` seconds
    pub fn step(&self, player: &mut Player, dt: f32) {
        if self.paused {
            return;
        }

        let prev_y = player.pos.y;
        let v0 = player.vel.y;
        let v1 = v0 + self.gravity * dt;
        player.vel.y = v1;
        player.pos.x += player.vel.x * dt;
        // Average velocity keeps the jump apex independent of the step size
        player.pos.y += (v0 + v1) * 0.5 * dt;

        let rest = player.rest_y(self.floor_y);
        if player.pos.y >= rest {
            player.pos.y = rest;
            player.vel.y = player.vel.y.min(0.0);
            player.grounded = true;
        } else {
            player.grounded = false;
        }

        let box_left = player.pos.x + player.box_offset().x;
        let box_right = box_left + player.box_size().x;
        if box_left < 0.0 {
            player.pos.x -= box_left;
        } else if box_right > self.world_width {
            player.pos.x -= box_right - self.world_width;
        }

        player.last_dy = player.pos.y - prev_y;
    }

    /// Overlaps for this tick; nothing is reported while paused
    pub fn contacts(
        &self,
        player: &Player,
        trigger: &StartTrigger,
        obstacles: &[Obstacle],
    ) -> Vec<Contact> {
        if self.paused {
            return Vec::new();
        }

        let mut contacts = Vec::new();
        if !trigger.is_parked() && player.overlaps_with(trigger) {
            contacts.push(Contact::Trigger);
        }
        contacts.extend(
            obstacles
                .iter()
                .filter(|o| player.overlaps_with(*o))
                .map(|o| Contact::Obstacle(o.id)),
        );
        contacts
    }
}
