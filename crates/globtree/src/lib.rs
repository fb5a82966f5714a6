pub mod app;
pub mod domain;
pub mod infra;

pub fn init() {
    tracing_subscriber::fmt::init();
}
