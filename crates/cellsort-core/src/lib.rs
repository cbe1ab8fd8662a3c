pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod grid;
pub mod input;
pub mod label;
pub mod output;
pub mod scale;
pub mod selection;
pub mod session;
