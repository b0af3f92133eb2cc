//! Domain models with validation at construction
//!
//! Request input is checked when converting into these types.
//! Invalid input returns ValidationError, not panic.

pub mod pagination;
pub mod product;
pub mod validation;

pub use pagination::{PageParams, PageWindow, MAX_COUNT};
pub use product::{round_cents, Product, ProductDraft, ProductPayload};
pub use validation::ValidationError;
