// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod opinion;
pub mod photo;
pub mod response;

pub use opinion::*;
pub use photo::*;
pub use response::*;
