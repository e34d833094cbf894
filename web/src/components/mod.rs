mod auth;
mod header;
mod icon;
mod toaster;

pub use auth::Auth;
pub use header::Header;
pub use icon::IconSvg;
pub use toaster::Toaster;
