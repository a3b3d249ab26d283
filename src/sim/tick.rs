//! Per-frame scene step
//!
//! Contacts reported during a frame are classified first, in arrival order,
//! then every animation task advances exactly once.

use super::controller::PuzzleController;
use super::state::{Contact, ContactOutcome};
use super::surface::SurfaceTrigger;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// New contacts with the lift mechanism since the previous frame
    pub contacts: Vec<Contact>,
}

impl TickInput {
    pub fn contact(contact: Contact) -> Self {
        Self {
            contacts: vec![contact],
        }
    }
}

/// Advance the puzzle by one frame of `dt` seconds
pub fn tick<L: SurfaceTrigger>(
    controller: &mut PuzzleController<L>,
    input: &TickInput,
    dt: f32,
) -> Vec<ContactOutcome> {
    let outcomes = input
        .contacts
        .iter()
        .map(|contact| controller.on_collision(contact))
        .collect();
    controller.tick(dt);
    outcomes
}
