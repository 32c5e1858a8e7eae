//! 公共 re-export，外部只引入 `model::*` 即可

pub mod config;
pub mod request;
pub mod rule;

pub use config::*;
pub use request::*;
pub use rule::*;
