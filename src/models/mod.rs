// Models module - exports all model types

mod center;
mod network;
mod order;
mod product;
mod route;
mod tariff;

// Re-export model types
pub use self::center::Center;
pub use self::network::{Network, NetworkError};
pub use self::order::Order;
pub use self::product::Product;
pub use self::route::DeliveryRoute;
pub use self::tariff::{CostTier, Tariff};

// Common type aliases for improved code readability
pub type ProductId = String;
pub type CenterId = String;
pub type Quantity = f64;
pub type Weight = f64;
pub type Cost = f64;
pub type Distance = f64;
