pub mod forms;
pub mod types;

pub use forms::{normalize_field_key, FormField, FormSchema, InputType};
pub use types::{field_values_from_json, FieldValues, FieldValuesError};
