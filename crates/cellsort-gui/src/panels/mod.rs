pub mod grid_interaction;
pub mod header;
pub mod status;
pub mod viewport;
