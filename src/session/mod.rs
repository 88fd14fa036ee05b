//! Server-side sessions identified by a cookie.

mod flash;
mod state;
mod store;

pub use flash::{Flash, FlashKind};
pub use state::Session;
pub use store::SessionStore;
