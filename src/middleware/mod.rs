mod auth;
mod panic;
mod session;

pub use auth::{SIGNIN_PATH, require_signin};
pub use panic::catch_panic_layer;
pub use session::session_layer;
