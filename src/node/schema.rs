use crate::node::kind::NodeKind;
use serde::Serialize;

/// Required inputs and declared outputs of a node, as the host presents them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSchema {
    pub kind: NodeKind,
    pub category: &'static str,
    pub required: Vec<InputField>,
    pub outputs: Vec<OutputField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputField {
    Options {
        name: &'static str,
        options: Vec<String>,
        default: String,
    },
    Boolean {
        name: &'static str,
        default: bool,
        label_on: &'static str,
        label_off: &'static str,
    },
}

impl InputField {
    pub fn flag(name: &'static str) -> Self {
        InputField::Boolean {
            name,
            default: false,
            label_on: "Yes",
            label_off: "No",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InputField::Options { name, .. } | InputField::Boolean { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputType {
    String,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: OutputType,
}

impl NodeSchema {
    pub fn new(kind: NodeKind, options: Vec<String>) -> Self {
        let default = options.first().cloned().unwrap_or_default();

        let mut required = vec![
            InputField::Options {
                name: kind.selection_field(),
                options,
                default,
            },
            InputField::flag("force_reinstall"),
        ];
        if kind.supports_upgrade() {
            required.push(InputField::flag("upgrade"));
        }

        Self {
            kind,
            category: "utils",
            required,
            outputs: vec![
                OutputField {
                    name: "status_message",
                    ty: OutputType::String,
                },
                OutputField {
                    name: "success",
                    ty: OutputType::Boolean,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_schema_has_upgrade_flag() {
        let schema = NodeSchema::new(NodeKind::Package, vec!["numpy".to_string()]);
        let names: Vec<_> = schema.required.iter().map(InputField::name).collect();
        assert_eq!(names, vec!["package_name", "force_reinstall", "upgrade"]);
    }

    #[test]
    fn wheel_schema_serializes_for_the_host() {
        let schema = NodeSchema::new(
            NodeKind::Wheel,
            vec!["https://h.test/a.whl".to_string(), "https://h.test/b.whl".to_string()],
        );
        let json = serde_json::to_value(&schema).unwrap();

        assert_eq!(json["kind"], "wheel");
        assert_eq!(json["required"][0]["type"], "options");
        assert_eq!(json["required"][0]["name"], "wheel_url");
        assert_eq!(json["required"][0]["default"], "https://h.test/a.whl");
        assert_eq!(json["required"][1]["type"], "boolean");
        assert_eq!(json["required"][1]["label_on"], "Yes");
        assert_eq!(json["required"].as_array().unwrap().len(), 2);
        assert_eq!(json["outputs"][0]["type"], "STRING");
        assert_eq!(json["outputs"][1]["name"], "success");
    }
}
