pub mod error;
pub mod extract;
pub mod meta;
pub mod output;
pub mod reflection;
pub mod snapshot;
pub mod util;

pub use error::{ReflectError, Result};
pub use meta::ShaderMeta;
pub use reflection::reflect_shader;
