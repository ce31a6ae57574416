pub mod presenter;
pub mod settings;
pub mod settings_io;
pub mod style;
pub mod terminal;
