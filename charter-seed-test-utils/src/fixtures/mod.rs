//! Test fixture modules for database rows and HTTP mock endpoints.

pub mod charter;
