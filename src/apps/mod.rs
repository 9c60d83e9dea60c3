//! The two demo applications, built from the public router API.

pub mod contacts;
pub mod pokemon;
