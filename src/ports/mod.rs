//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by UI/adapter into the application
//! - Outbound: Called by application into infrastructure
//! - Composer: Renders replies for the transport

pub mod composer;
pub mod inbound;
pub mod outbound;

pub use composer::{ReplyComposer, ReplyMessage};
pub use inbound::InputPort;
pub use outbound::{ClockPort, NotifierPort, ScheduleStore, UpsertOutcome};
