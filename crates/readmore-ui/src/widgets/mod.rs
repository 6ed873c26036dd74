pub mod button;
pub mod expandable_text;
pub mod gradient_overlay;
pub mod scroll;
pub mod text;
