mod export;
mod server;

pub use export::{EXPORTED_FILES, export};
pub use server::serve;
