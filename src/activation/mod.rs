pub mod hard_limit;

pub use hard_limit::hard_limit;
