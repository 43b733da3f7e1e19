pub mod instruction_reader;
pub mod receipt_writer;
