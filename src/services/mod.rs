pub use admin_gate::*;
pub use downloads::*;
pub use identity::*;

mod admin_gate;
mod downloads;
mod identity;
