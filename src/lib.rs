#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod clock;
pub mod sketch;
pub mod surface;
pub use app::NoiseWeaveApp;
