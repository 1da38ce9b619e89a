//! Names command report data structures.

use serde::Serialize;
use sharpname_codegen::{
    class_name, enums::enum_value_names, extension_class_unqualified_name, file_namespace,
    reflection_class_name,
};
use sharpname_schema::{DescriptorSet, FileDescriptor, TypeDescriptor, TypeKind};

use super::output::{Output, Report};

/// Every name resolved for a descriptor set.
#[derive(Debug, Serialize)]
pub struct NamesReport {
    pub files: Vec<FileNames>,
}

/// Names resolved for one schema file.
#[derive(Debug, Serialize)]
pub struct FileNames {
    /// Schema file name.
    pub file: String,
    /// Namespace of the generated code.
    pub namespace: String,
    /// Qualified reflection class name.
    pub reflection_class: String,
    /// Unqualified extensions class name.
    pub extension_class: String,
    pub types: Vec<TypeNames>,
}

/// Names resolved for one message or enum.
#[derive(Debug, Serialize)]
pub struct TypeNames {
    pub full_name: String,
    pub class_name: String,
    /// `message` or `enum`.
    pub kind: &'static str,
    /// Declared inside another message.
    pub nested: bool,
    /// Enum values as `(raw, generated)` pairs; empty for messages.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<(String, String)>,
}

impl NamesReport {
    pub fn new(set: &DescriptorSet) -> Self {
        Self {
            files: set.files.iter().map(FileNames::new).collect(),
        }
    }
}

impl FileNames {
    fn new(file: &FileDescriptor) -> Self {
        let namespace = file_namespace(file);
        tracing::debug!(file = %file.name, %namespace, "resolved namespace");

        Self {
            file: file.name.clone(),
            namespace,
            reflection_class: reflection_class_name(file),
            extension_class: extension_class_unqualified_name(file),
            types: file.types().iter().map(TypeNames::new).collect(),
        }
    }
}

impl TypeNames {
    fn new(ty: &TypeDescriptor<'_>) -> Self {
        let values = ty
            .as_enum()
            .map(|enum_type| {
                enum_value_names(enum_type)
                    .into_iter()
                    .map(|(raw, name)| (raw.to_string(), name))
                    .collect()
            })
            .unwrap_or_default();

        let kind = match ty.kind() {
            TypeKind::Message(_) => "message",
            TypeKind::Enum(_) => "enum",
        };

        Self {
            full_name: ty.full_name().to_string(),
            class_name: class_name(ty),
            kind,
            nested: ty.is_nested(),
            values,
        }
    }
}

impl Report for NamesReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, file) in self.files.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&file.file);
            let namespace = if file.namespace.is_empty() {
                "(global)"
            } else {
                file.namespace.as_str()
            };
            out.key_value_indented("namespace", namespace);
            out.key_value_indented("reflection", &file.reflection_class);
            out.key_value_indented("extensions", &file.extension_class);

            for ty in &file.types {
                out.list_item(&format!("{} -> {}", ty.full_name, ty.class_name));
                for (raw, name) in &ty.values {
                    out.nested_item(&format!("{} -> {}", raw, name));
                }
            }
        }
    }
}
