use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCachedResultDto {
    #[validate(length(min = 1, message = "resultImageUrl must not be empty."))]
    pub result_image_url: String,
    #[validate(length(
        min = 1,
        max = 200,
        message = "productTitle must be between 1 and 200 characters."
    ))]
    pub product_title: String,
    #[validate(length(max = 200, message = "variantTitle must be at most 200 characters."))]
    pub variant_title: Option<String>,
}
