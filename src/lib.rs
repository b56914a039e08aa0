//! Procedural generator for the building app icon and its adaptive-icon
//! foreground layer.

pub mod canvas;
pub mod icon_gen;
pub mod layout;
pub mod palette;
pub mod verify;
