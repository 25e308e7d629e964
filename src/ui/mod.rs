//! Window widgets and colors

pub mod field;
pub mod theme;
