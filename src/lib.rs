//! This crate keeps a catalog of courses ordered by course number and answers questions
//! about it: list every course in order, or show one course and what it requires.
//!
//! ## Binary Search Tree
//!
//! The catalog is a Binary Search Tree ([`CourseIndex`]). Every `Node` stores one
//! [`CourseRecord`] and may have a left and a right child. The invariants are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a course number that compares
//!    less than its own.
//! 2. For every `Node`, all the `Node`s in its right subtree have a course number that compares
//!    greater than or equal to its own.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Looking a course up takes `O(height)`. The tree is never rebalanced, so feeding it course
//! numbers that are already sorted degrades it to a list and lookups to `O(N)`. Visiting the
//! left subtree, then the subtree root, then the right subtree yields the courses sorted by
//! number.
//!
//! ## Around the tree
//!
//! - [`loader`] turns comma-delimited text into [`CourseRecord`]s and inserts them.
//! - [`planner`] is the interactive menu the `course-planner` binary runs.
//! - [`cli`] holds the binary's arguments.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cli;
pub mod course;
pub mod detail;
pub mod error;
pub mod index;
pub mod loader;
pub mod planner;

pub use course::CourseRecord;
pub use detail::CourseDetail;
pub use error::{IndexError, LoadError, PlannerError};
pub use index::CourseIndex;
