pub mod field_element;
pub mod field_element_vector;
