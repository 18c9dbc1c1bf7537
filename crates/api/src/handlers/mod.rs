pub mod boundary;
pub mod pins;
pub mod settings;
pub mod tags;
