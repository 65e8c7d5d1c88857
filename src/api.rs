pub mod config_dto;
pub mod workflow_dto;
