pub mod handlers;
pub mod metadata;
pub mod middleware;
pub mod router;
