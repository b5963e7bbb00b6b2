pub mod db;
pub mod server;

pub use db::*;
pub use server::*;
