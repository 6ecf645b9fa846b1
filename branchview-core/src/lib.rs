//! Branchview Core
//!
//! Core types shared by the Branchview client and CLI.
//!
//! This crate contains:
//! - Domain types: records decoded from the hosting API (Repository, Branch, etc.)
//! - Selection: choosing which repository of a listing to display

pub mod domain;
pub mod selection;
