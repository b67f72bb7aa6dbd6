//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.

use crate::fsm::StateId;
use crate::fsm::context::LightReading;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The static frame is on screen and polling has begun.
    Started(StateId),

    /// A cycle rendered a scaled value different from the previous one.
    ValueChanged(LightReading),

    /// An unrecognised state byte was found and the scheduler reset.
    StateReset { raw: u8 },
}
