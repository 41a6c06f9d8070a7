#![forbid(unsafe_code)]

//! Core data model for the trellis table renderer.
//!
//! This crate holds the leaf value types shared by the style catalog and the
//! layout engine:
//! - [`Cell`] - cell content or a merge marker
//! - [`Alignment`] / [`AlignmentSpec`] - column alignment selection
//! - [`TableError`] - eager validation errors
//!
//! # Example
//! ```
//! use trellis_core::{Alignment, Cell};
//!
//! let header: Vec<Cell> = vec!["Name".into(), "Score".into()];
//! assert_eq!(header[0].text(), "Name");
//! assert_eq!(Alignment::default(), Alignment::Center);
//! ```

pub mod alignment;
pub mod cell;
pub mod error;

pub use alignment::{Alignment, AlignmentSpec};
pub use cell::Cell;
pub use error::TableError;
