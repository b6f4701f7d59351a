//! Prelude module for convenient imports
//!
//! Import everything you need with: `use sales::prelude::*;`

// Domain types
pub use crate::domain::{
    LineItem, Product, ProductTally, PurchaseRecord, SalesData, Seller, SellerStats, TopProduct,
    month_key, round2,
};

// Engine types
pub use crate::engine::{
    AnalyzeError, PurchaseProcessor, SellerReport, TOP_PRODUCT_LIMIT, analyze,
    rank_and_assign_bonus, select_top_products, validate, validate_shape,
};

// Strategy types
pub use crate::strategy::{
    AnalyzeOptions, BonusStrategy, DEFAULT_BONUS, DEFAULT_REVENUE, DefaultBonus, DefaultRevenue,
    RevenueStrategy, options_from_value,
};

// IO types
pub use crate::io::{
    IoError, dataset_from_value, document_from_reader, read_dataset, read_document, write_reports,
};

// App types
pub use crate::app::{AppError, CliApp};
