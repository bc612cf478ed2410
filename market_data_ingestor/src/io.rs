pub mod csv_source;
