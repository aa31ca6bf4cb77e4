#[derive(Debug)]
pub struct NormalizedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl NormalizedImage {
    pub fn mime_type(&self) -> &'static str {
        "image/jpeg"
    }
}
