// Interface adapters: HTTP surface, JSON file persistence and page rendering.

pub mod handlers;
pub mod json_files;
pub mod protocol;
pub mod routes;
pub mod state;
pub mod views;
