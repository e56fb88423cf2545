//! `gork-core`: the typed interaction model and the dispatcher that maps a
//! decoded interaction onto one of a handful of canned replies.
//!
//! Nothing in this crate performs I/O. Signature checks live in
//! `gork-security`; the HTTP surface lives in `gork-gateway`.

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod interaction;
pub mod pool;
pub mod response;

pub use command::{Command, Component};
pub use dispatcher::{DispatchOutcome, Dispatcher, ASK_GORK_MARKER};
pub use error::InteractionError;
pub use interaction::{Interaction, InteractionKind};
pub use pool::{ResponsePool, GORK_RESPONSES};
pub use response::{InteractionResponse, MessageFlags, ResponseData, ResponseKind};
