pub mod button;
pub mod icon_button;
