//! Domain layer for the Nomorra plugin.
//!
//! Core data types independent of Zellij APIs: the destination record, the
//! validated catalog, static profile content and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`destination`]: Destination record and validation rules
//! - [`catalog`]: Immutable, validated destination collection
//! - [`profile`]: About text and social links

pub mod catalog;
pub mod destination;
pub mod error;
pub mod profile;

pub use catalog::Catalog;
pub use destination::{Destination, DestinationId, StarRating};
pub use error::{NomorraError, Result};
pub use profile::{SocialIcon, SocialLink, SOCIAL_LINKS};
