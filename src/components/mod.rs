pub mod navigation;
pub mod theme_dropdown;
pub mod theme_icon;
