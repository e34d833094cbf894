mod session;
mod toasts;

pub use session::*;
pub use toasts::*;
