//! Shop Info Module
//!
//! Static storefront metadata: location, contacts and map deep links.
//! Nothing here touches the database.

pub mod info;
pub mod router;

pub use info::{MapLinks, ShopLocation};
pub use router::shop_router;
