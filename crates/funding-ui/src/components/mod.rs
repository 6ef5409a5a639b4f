pub mod header;
pub mod metric;
pub mod share_bar;
