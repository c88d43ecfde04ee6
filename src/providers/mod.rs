//! Remote service integrations.

pub mod babix;
