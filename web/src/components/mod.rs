pub mod error;
pub mod loading;

pub use error::ErrorView;
pub use loading::LoadingView;
