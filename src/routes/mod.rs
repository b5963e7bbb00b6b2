mod common;
mod items;

pub use common::{common_routes, HEALTH_TIMEOUT};
pub use items::item_routes;
