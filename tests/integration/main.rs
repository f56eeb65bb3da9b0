#[path = "../common/mod.rs"]
mod common;

mod config_tests;
mod craft_tests;
mod vpp_tests;
