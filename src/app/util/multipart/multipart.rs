use axum::extract::Multipart;

use crate::app::models::api_error::ApiError;

use super::models::{file_properties::FileProperties, form_properties::FormProperties};

pub async fn get_form_properties(mut multipart: Multipart) -> Result<FormProperties, ApiError> {
    let mut form = FormProperties::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        let Some(file_name) = field.file_name().map(str::to_string) else {
            let value = field.text().await?;
            form.texts.insert(field_name, value);
            continue;
        };

        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await?;

        form.files.push(FileProperties {
            field_name,
            file_name,
            mime_type,
            data,
        });
    }

    Ok(form)
}
