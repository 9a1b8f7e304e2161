/// IO for modification symbol CSV files
pub mod modification_symbol_csv;
