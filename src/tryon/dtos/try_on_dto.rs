use mime::Mime;

use crate::{
    app::util::multipart::models::{
        file_properties::FileProperties, form_properties::FormProperties,
    },
    tryon::{errors::TryOnApiError, models::try_on_request::TryOnRequest},
};

pub static MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
pub static MAX_PRODUCT_IMAGE_SIZE: usize = 20 * 1024 * 1024;
pub static ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

#[derive(Debug, Default)]
pub struct TryOnDto {
    pub user_photo: Option<FileProperties>,
    pub product_image_url: Option<String>,
    pub product_type: Option<String>,
    pub product_title: Option<String>,
}

impl TryOnDto {
    pub fn from_form(mut form: FormProperties) -> Self {
        TryOnDto {
            user_photo: form
                .take_file("userPhoto")
                .filter(|file| !file.data.is_empty()),
            product_image_url: form.take_text("productImageUrl"),
            product_type: form.take_text("productType"),
            product_title: form.take_text("productTitle"),
        }
    }

    /// Presence, then size, then type. Runs before any network call.
    pub fn validate(self) -> Result<TryOnRequest, TryOnApiError> {
        let (Some(user_photo), Some(product_image_url)) = (self.user_photo, self.product_image_url)
        else {
            return Err(TryOnApiError::MissingParameter);
        };

        if user_photo.data.len() > MAX_FILE_SIZE {
            return Err(TryOnApiError::PayloadTooLarge);
        }

        if !is_allowed_mime_type(&user_photo.mime_type) {
            return Err(TryOnApiError::UnsupportedMediaType);
        }

        Ok(TryOnRequest {
            user_photo,
            product_image_url,
            product_type: self.product_type,
            product_title: self.product_title,
        })
    }
}

fn is_allowed_mime_type(mime_type: &str) -> bool {
    match mime_type.parse::<Mime>() {
        Ok(mime) => ALLOWED_MIME_TYPES.contains(&mime.essence_str().to_ascii_lowercase().as_str()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn photo(mime_type: &str, size: usize) -> FileProperties {
        FileProperties {
            field_name: "userPhoto".to_string(),
            file_name: "me.jpg".to_string(),
            mime_type: mime_type.to_string(),
            data: Bytes::from(vec![0u8; size]),
        }
    }

    fn dto(user_photo: Option<FileProperties>, product_image_url: Option<&str>) -> TryOnDto {
        TryOnDto {
            user_photo,
            product_image_url: product_image_url.map(str::to_string),
            product_type: Some("dress".to_string()),
            product_title: None,
        }
    }

    #[test]
    fn accepts_supported_photo() {
        let request = dto(Some(photo("image/jpeg", 1024)), Some("https://shop.test/p.jpg"))
            .validate()
            .unwrap();

        assert_eq!(request.product_image_url, "https://shop.test/p.jpg");
        assert_eq!(request.product_type.as_deref(), Some("dress"));
    }

    #[test]
    fn requires_photo_and_product_image() {
        assert_eq!(
            dto(None, Some("https://shop.test/p.jpg")).validate().unwrap_err(),
            TryOnApiError::MissingParameter
        );
        assert_eq!(
            dto(Some(photo("image/png", 10)), None).validate().unwrap_err(),
            TryOnApiError::MissingParameter
        );
    }

    #[test]
    fn rejects_photo_over_five_mebibytes() {
        assert_eq!(
            dto(Some(photo("image/jpeg", MAX_FILE_SIZE + 1)), Some("https://shop.test/p.jpg"))
                .validate()
                .unwrap_err(),
            TryOnApiError::PayloadTooLarge
        );
        assert!(
            dto(Some(photo("image/jpeg", MAX_FILE_SIZE)), Some("https://shop.test/p.jpg"))
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn size_is_checked_before_type() {
        assert_eq!(
            dto(Some(photo("image/gif", MAX_FILE_SIZE + 1)), Some("https://shop.test/p.jpg"))
                .validate()
                .unwrap_err(),
            TryOnApiError::PayloadTooLarge
        );
    }

    #[test]
    fn rejects_unsupported_mime_types() {
        for mime_type in ["image/gif", "image/heic", "application/pdf", "text/plain", "not a mime"] {
            assert_eq!(
                dto(Some(photo(mime_type, 10)), Some("https://shop.test/p.jpg"))
                    .validate()
                    .unwrap_err(),
                TryOnApiError::UnsupportedMediaType,
                "{}",
                mime_type
            );
        }
    }

    #[test]
    fn accepts_every_supported_mime_type() {
        for mime_type in ["image/jpeg", "image/jpg", "image/png", "image/webp", "IMAGE/PNG"] {
            assert!(
                dto(Some(photo(mime_type, 10)), Some("https://shop.test/p.jpg"))
                    .validate()
                    .is_ok(),
                "{}",
                mime_type
            );
        }
    }

    #[test]
    fn builds_from_form_fields() {
        let mut form = FormProperties::default();
        form.files.push(photo("image/webp", 16));
        form.texts.insert(
            "productImageUrl".to_string(),
            " https://shop.test/p.jpg ".to_string(),
        );
        form.texts.insert("productType".to_string(), "Jacket".to_string());
        form.texts.insert("productTitle".to_string(), "".to_string());
        form.texts.insert("variantTitle".to_string(), "Blue / M".to_string());

        let dto = TryOnDto::from_form(form);

        assert!(dto.user_photo.is_some());
        assert_eq!(dto.product_image_url.as_deref(), Some("https://shop.test/p.jpg"));
        assert_eq!(dto.product_type.as_deref(), Some("Jacket"));
        assert_eq!(dto.product_title, None);
    }

    #[test]
    fn empty_photo_counts_as_missing() {
        let mut form = FormProperties::default();
        form.files.push(photo("image/jpeg", 0));
        form.texts.insert(
            "productImageUrl".to_string(),
            "https://shop.test/p.jpg".to_string(),
        );

        assert_eq!(
            TryOnDto::from_form(form).validate().unwrap_err(),
            TryOnApiError::MissingParameter
        );
    }
}
