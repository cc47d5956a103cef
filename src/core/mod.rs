pub mod controller;
pub mod view;

pub use crate::domain::ports::ConfigProvider;
