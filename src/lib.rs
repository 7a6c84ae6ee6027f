pub mod api;
pub mod errors;
pub mod leagues;
pub mod playlist;
pub mod times;
