#![forbid(unsafe_code)]

pub mod buffer;
pub mod matching;
pub mod model;
pub mod results;
pub mod scoring;
pub mod session;
pub mod time;

pub use time::Clock;
