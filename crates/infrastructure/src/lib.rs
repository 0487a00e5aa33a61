//! Fatcat DNS Infrastructure Layer
pub mod dns;
