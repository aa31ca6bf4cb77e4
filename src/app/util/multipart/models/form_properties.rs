use std::collections::HashMap;

use super::file_properties::FileProperties;

/// Every field of a multipart body, split into file parts and text parts.
#[derive(Debug, Default)]
pub struct FormProperties {
    pub files: Vec<FileProperties>,
    pub texts: HashMap<String, String>,
}

impl FormProperties {
    pub fn take_file(&mut self, field_name: &str) -> Option<FileProperties> {
        let index = self
            .files
            .iter()
            .position(|file| file.field_name == field_name)?;

        Some(self.files.swap_remove(index))
    }

    /// Text value of `field_name`, trimmed; blank values count as absent.
    pub fn take_text(&mut self, field_name: &str) -> Option<String> {
        self.texts
            .remove(field_name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
