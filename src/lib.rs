pub mod bitreader;
pub mod error;
pub mod golomb;

pub use bitreader::BitReader;
pub use error::{Error, Result};
