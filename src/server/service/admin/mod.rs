//! Administrative services.
//!
//! Holds the admin bootstrap code used to promote the first registered account.

pub mod code;
