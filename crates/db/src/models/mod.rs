pub mod boundary;
pub mod pin;
pub mod settings;
pub mod tag;
