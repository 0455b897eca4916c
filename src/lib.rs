pub mod features;
pub mod services;
pub mod utilities;

pub use utilities::app_state::DataContext;
