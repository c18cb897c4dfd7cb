//! Application pages module
//!
//! - Home page (landing with the prompt input)
//! - New app page (build hand-off)
//! - Not found page

mod home;
mod new_app;
mod not_found;

pub use home::HomePage;
pub use new_app::NewAppPage;
pub use not_found::NotFoundPage;
