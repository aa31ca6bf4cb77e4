pub mod normalized_image;
pub mod try_on_request;
pub mod try_on_response;
