//! kvdesk-common - I/O-free console state
//!
//! Records, forms, snapshots and the small state machines the dispatcher and
//! the UI share. Nothing here performs a request or touches a timer.

mod identity;
mod notification;
mod numeric;
mod records;
mod sequence;
mod snapshot;
mod state;
mod tab;
mod view_models;

pub use identity::*;
pub use notification::*;
pub use numeric::*;
pub use records::*;
pub use sequence::*;
pub use snapshot::*;
pub use state::*;
pub use tab::*;
pub use view_models::*;
