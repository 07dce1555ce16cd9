pub mod osrm_dto;
pub mod trip_dto;
