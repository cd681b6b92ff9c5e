pub mod metric;
pub mod packet;
pub mod score;
