pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{
    basename_of, extension_of, is_capturable_url, is_data_url, resolve_or_raw, resolve_url,
};
