pub mod analyze;
pub mod error;
pub mod processor;
pub mod ranking;
pub mod report;
pub mod top_products;
pub mod validate;

// Re-export commonly used types
pub use analyze::analyze;
pub use error::AnalyzeError;
pub use processor::PurchaseProcessor;
pub use ranking::rank_and_assign_bonus;
pub use report::{SellerReport, build_report};
pub use top_products::{TOP_PRODUCT_LIMIT, assign_top_products, select_top_products};
pub use validate::{validate, validate_shape};
