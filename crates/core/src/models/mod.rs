pub mod genre;
pub mod movie;

pub use genre::*;
pub use movie::*;
