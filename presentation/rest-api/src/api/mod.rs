pub mod error;
pub mod tags;

pub mod diagnostics {
    pub mod dto;
    pub mod routes;
}

pub mod health {
    pub mod routes;
}

pub mod movie {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
