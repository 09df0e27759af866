//! Authentication module for JWT bearer verification.

mod extractor;

pub use extractor::BearerAuth;
