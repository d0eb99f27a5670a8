//! Configuration form elements handed to the form renderer.

use serde::Serialize;

use super::options::SelectOptions;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormElement {
    Select {
        name: String,
        title: String,
        options: SelectOptions,
        default_value: String,
    },
    Checkboxes {
        name: String,
        title: String,
        options: SelectOptions,
        default_value: Vec<String>,
    },
}

impl FormElement {
    pub fn name(&self) -> &str {
        match self {
            Self::Select { name, .. } | Self::Checkboxes { name, .. } => name,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Select { title, .. } | Self::Checkboxes { title, .. } => title,
        }
    }

    pub fn options(&self) -> &SelectOptions {
        match self {
            Self::Select { options, .. } | Self::Checkboxes { options, .. } => options,
        }
    }
}
