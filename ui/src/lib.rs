//! Shared UI crate for Resumescope. All page-controller logic lives here;
//! the `web` crate only launches it.

pub mod core;
pub mod results;
pub mod views;

pub mod components {
    // Page header with the theme toggle (components/navbar.rs)
    mod navbar;
    pub use navbar::Navbar;
}
