/// Reader for modification symbol CSV files
pub mod reader;
