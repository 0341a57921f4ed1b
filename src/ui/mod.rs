//! UI module - egui widgets and the egui display sink

pub mod components;
pub mod markdown;
pub mod page_view;
