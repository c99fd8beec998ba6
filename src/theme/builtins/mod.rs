use super::types::ThemeDefinition;

pub mod light;
pub mod slate;

pub use light::LIGHT;
pub use slate::SLATE;

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[slate::DEFINITION, light::DEFINITION];
