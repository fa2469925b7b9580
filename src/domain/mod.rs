//! Domain layer: validated entities and their capabilities
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod error;
pub mod table;
pub mod tree;
pub mod user;
pub mod validation;

pub use error::{DomainResult, ValidationError};
pub use table::{OvalTable, RectangularTable, Table, TableBehavior};
pub use tree::{DeciduousTree, EvergreenTree, Foliage, Tree, TreeBehavior};
pub use user::{FeedUser, Post, SocialMediaUser, UserBehavior, UserPolicy};
