pub mod aggregate;
pub mod send;

pub use aggregate::{ChatReply, ChatRole, Message};
pub use send::{ChatOutcome, SendPlan};
