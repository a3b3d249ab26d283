//! Delayed removal of transient scene objects

/// Counts frame time until a fixed delay has passed
#[derive(Debug, Clone)]
pub struct Expiry {
    delay: f32,
    elapsed: f32,
}

impl Expiry {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt`; true once the delay has been reached
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.delay
    }

    pub fn remaining(&self) -> f32 {
        (self.delay - self.elapsed).max(0.0)
    }
}
