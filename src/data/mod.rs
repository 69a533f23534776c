pub mod axis;
pub mod clusters;
pub mod dataset;
pub mod export;
pub mod filter;
pub mod format;
pub mod row_index;
pub mod selection;
pub mod session;
pub mod table;
pub mod timing;
