pub mod cook_operations;
pub mod elongate_operations;
