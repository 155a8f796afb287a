extern crate log;
extern crate serde;
extern crate serde_json;
extern crate uuid;

mod taskhive;

pub mod config;
pub mod storage;
pub mod task;

pub use config::Config;
pub use taskhive::*;
