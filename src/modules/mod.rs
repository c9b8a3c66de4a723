pub mod language;
pub mod movie;
