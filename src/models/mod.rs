pub mod api;
pub mod cover;
pub mod image;
pub mod title;

pub use api::*;
pub use cover::*;
pub use self::image::*;
pub use title::*;
