pub mod controllers;
pub mod dto;
pub mod error;
pub mod multipart;
pub mod routes;
pub mod state;
