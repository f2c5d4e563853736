//! Domain layer: wizard state machine, review synthesis, branding.

pub mod branding;
pub mod foundation;
pub mod review;
pub mod wizard;
