pub mod components;
pub mod design_system;
pub mod menu_panel;
pub mod telemetry_panel;
pub mod ui;
pub mod wheel_view;
