//! Service-account identity: credential decoding, RS256 assertion signing, and bearer tokens.

pub mod assertion;
pub mod credential;
pub mod token;

pub use assertion::*;
pub use credential::*;
pub use token::*;
