// Interface adapters: auth API client, page views and HTTP handlers.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
pub mod views;
