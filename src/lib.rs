pub mod cs;
pub mod error;

pub use cs::security;
pub use cs::security::{
    glue_padding, hmac_md5, hmac_md5_hex, md5_digest, md5_hex, Forgery, LengthExtension, Md5,
    Md5Builder, Md5Digest, Md5State, MD5_OUTPUT_SIZE,
};
pub use error::{Error, Result};
