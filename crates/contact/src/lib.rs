mod controller;
mod endpoint;
mod form;
mod types;
mod view;

pub use controller::*;
pub use endpoint::*;
pub use form::*;
pub use types::*;
pub use view::*;
