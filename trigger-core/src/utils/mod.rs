mod datafield_manager;
mod lang_strings;

pub use datafield_manager::DatafieldManager;
pub use lang_strings::LangStrings;
