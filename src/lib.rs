pub mod safeincloud;

pub use safeincloud::*;
