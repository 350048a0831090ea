//! Backend-specific records carried next to the portable fields.
//!
//! Each entity kind has its own tagged enum, discriminated by the `t` field.
//! Tags this build does not know about parse as `Unknown` and are otherwise
//! ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ShaderMetaExt {
    Dx12(Dx12ShaderMetaExt),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dx12ShaderMetaExt {
    /// shader model text, eg `cs_6_5`
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub creator: Option<String>,
    pub flags: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub min_feature_level: Option<String>,
    pub requires_flags: u64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[serde(default)]
    pub is_sample_frequency_shader: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ShaderBindMetaExt {
    Dx12(Dx12ShaderBindMetaExt),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dx12ShaderBindMetaExt {
    pub id: u32,
    pub flags: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ShaderResourceMetaExt {
    Dx12(Dx12ConstantBufferMetaExt),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dx12ConstantBufferMetaExt {
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub ty: Option<String>,
    pub flags: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ShaderVariableMetaExt {
    Dx12(Dx12ShaderVariableMetaExt),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dx12ShaderVariableMetaExt {
    pub flags: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_with_backend_name() {
        let ext = ShaderBindMetaExt::Dx12(Dx12ShaderBindMetaExt { id: 3, flags: 1 });
        let json = serde_json::to_string(&ext).unwrap();
        assert_eq!(json, r#"{"t":"dx12","id":3,"flags":1}"#);
    }

    #[test]
    fn unknown_tags_are_tolerated() {
        let ext: ShaderVariableMetaExt =
            serde_json::from_str(r#"{"t":"vulkan","binding":4}"#).unwrap();
        assert_eq!(ext, ShaderVariableMetaExt::Unknown);

        let ext: ShaderMetaExt = serde_json::from_str(r#"{"t":"metal"}"#).unwrap();
        assert_eq!(ext, ShaderMetaExt::Unknown);
    }
}
