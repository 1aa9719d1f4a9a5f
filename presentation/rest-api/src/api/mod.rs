pub mod error;
pub mod health {
    pub mod routes;
}
pub mod home;
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod tags;
