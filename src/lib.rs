//! Validated domain entities.
//!
//! Three unrelated entities ([`Table`], [`Tree`], [`SocialMediaUser`]) check
//! their invariants once, at construction, and return a [`ValidationError`]
//! instead of existing in an invalid state. Behavior lives in capability traits
//! ([`TableBehavior`], [`TreeBehavior`], [`UserBehavior`]) implemented by
//! concrete variants that own a validated entity.
//!
//! ```
//! use entities::{RectangularTable, TableBehavior};
//!
//! let mut desk = RectangularTable::new("wood", 75.0, 120.0, 60.0)?;
//! assert_eq!(desk.calculate_area(), 7200.0);
//! desk.change_material("oak veneer");
//! assert_eq!(desk.table().material(), "oak veneer");
//! # Ok::<(), entities::ValidationError>(())
//! ```

pub mod config;
pub mod domain;
pub mod util;

pub use domain::*;
