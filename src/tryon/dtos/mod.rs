pub mod try_on_dto;
