pub mod hmac;
pub mod length_extension;
pub mod md5;

// Re-export MD5 functionality
pub use md5::{
    glue_padding, md5_digest, md5_hex, padding_len, Md5, Md5Builder, Md5Digest, Md5State,
    MD5_BLOCK_SIZE, MD5_OUTPUT_SIZE,
};

// Re-export HMAC functionality
pub use hmac::{hmac_md5, hmac_md5_hex};

// Re-export length-extension functionality
pub use length_extension::{Forgery, LengthExtension};
