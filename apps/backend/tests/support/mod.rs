#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod factory;
pub mod test_state;

// Not every test binary drives the HTTP app or a DB-backed state.
#[allow(unused_imports)]
pub use app_builder::create_test_app;
#[allow(unused_imports)]
pub use test_state::build_test_state;
