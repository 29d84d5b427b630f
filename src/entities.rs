use std::fmt;

use log::info;

use crate::constants::*;
use crate::types::{Point, Vector};

/// Engine command strength for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Thrust {
    Boost,
    Power(u32),
}

impl Thrust {
    pub fn is_boost(&self) -> bool {
        matches!(self, Thrust::Boost)
    }
}

impl fmt::Display for Thrust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thrust::Boost => f.write_str(BOOST_TOKEN),
            Thrust::Power(power) => write!(f, "{}", power),
        }
    }
}

// --- Pod: position is unset until the first observation ---
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pod {
    position: Option<Point>,
    pub velocity: Vector,
    boost_available: bool,
}

impl Default for Pod {
    fn default() -> Self {
        Pod::new()
    }
}

impl Pod {
    pub const RADIUS: f64 = POD_RADIUS;

    pub fn new() -> Self {
        Pod {
            position: None,
            velocity: Vector::default(),
            boost_available: true,
        }
    }

    /// Last observed position, or the origin before the first observation.
    pub fn location(&self) -> Point {
        self.position.unwrap_or_default()
    }

    pub fn boost_available(&self) -> bool {
        self.boost_available
    }

    /// Records a new position and derives velocity from the delta.
    pub fn observe(&mut self, new_position: Point) {
        let old_position = self.position.unwrap_or(new_position);
        self.velocity = Vector::new((new_position - old_position).scale(DRAG_FACTOR));
        self.position = Some(new_position);
    }

    /// What `consume_boost` would return, without spending anything.
    pub fn available_thrust(&self) -> Thrust {
        if self.boost_available {
            Thrust::Boost
        } else {
            Thrust::Power(MAX_THRUST)
        }
    }

    pub fn consume_boost(&mut self) -> Thrust {
        let thrust = self.available_thrust();
        if self.boost_available {
            info!("Boost spent at {}", self.location());
        }
        self.boost_available = false;
        thrust
    }

    pub fn distance(&self, point: Point) -> f64 {
        self.location().distance(point)
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

impl fmt::Display for Pod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "at {} heading {}", position, self.velocity),
            None => write!(f, "unseen"),
        }
    }
}
