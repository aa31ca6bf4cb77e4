pub mod create_cached_result_dto;
pub mod edit_product_dto;
