//! ScrawlPad: draw your alphabet once, then render any text in your
//! own handwriting through a local synthesis backend.

pub mod app;
pub mod ui;
