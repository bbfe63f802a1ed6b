mod field_name_utils;

pub use field_name_utils::FieldNameUtils;
