//! Command implementations for the repo2pkg CLI

pub mod package;
