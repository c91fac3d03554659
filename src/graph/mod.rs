pub mod builder;
pub mod producer;
pub mod style;
pub mod visual;

pub use builder::*;
pub use producer::*;
pub use style::*;
pub use visual::*;
