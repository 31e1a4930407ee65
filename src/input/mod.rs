// src/input/mod.rs

//! Constraint input: the fixed textual grammar and file loading.
//!
//! Each input line has the shape
//! `Step <X> must be finished before step <Y> can begin.` and is parsed
//! into a [`Constraint`] pair. Everything downstream works on pairs, never
//! on raw text.

pub mod parser;

pub use parser::{Constraint, parse_constraints, parse_line, read_constraints};
