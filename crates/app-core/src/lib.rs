//! Core application logic for Bugar
//!
//! This crate contains the offline content catalog: categories, training
//! programs, their weekly instructions, and daily content.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;

pub use catalog::{
    programs_in_category, Catalog, CatalogData, CatalogError, Category, CategoryId, Equipment,
    Instruction, InstructionContent, InstructionId, Program, ProgramId, ProgramProgress,
    ALL_CATEGORY_ID, ALL_CATEGORY_NAME,
};
