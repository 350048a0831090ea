use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ShaderResourceMetaExt, ShaderVariableMetaExt, absent_map, non_empty_map};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantBufferMeta {
    pub name: String,
    pub size: u32,
    #[serde(skip_serializing_if = "absent_map")]
    #[serde(default)]
    pub vars: Option<BTreeMap<String, ShaderVariableMeta>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub exts: Vec<ShaderResourceMetaExt>,
}

impl ConstantBufferMeta {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
            vars: None,
            exts: vec![],
        }
    }

    pub fn normalized(mut self) -> Self {
        self.vars = non_empty_map(self.vars);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderVariableMeta {
    pub name: String,
    /// key into the document's `types` mapping
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub data: Option<OffsetSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub texture: Option<OffsetSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub sampler: Option<OffsetSize>,
    /// default value bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub defv: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub exts: Vec<ShaderVariableMetaExt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetSize {
    pub offset: u32,
    pub size: u32,
}

impl OffsetSize {
    /// `None` when both fields are zero, which the backend uses for "no such region"
    pub fn non_zero(offset: u32, size: u32) -> Option<Self> {
        if offset == 0 && size == 0 {
            return None;
        }

        Some(Self { offset, size })
    }
}
