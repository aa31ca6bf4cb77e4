use std::borrow::Cow;

use regex::Regex;
use validator::ValidationError;

lazy_static! {
    pub static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap();
}

pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    match HEX_COLOR_REGEX.is_match(value) {
        true => Ok(()),
        false => {
            let mut error = ValidationError::new("hex_color");
            error.message = Some(Cow::from("must be a hex color such as #6366f1."));
            Err(error)
        }
    }
}
