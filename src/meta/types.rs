use serde::{Deserialize, Serialize};

use super::{is_default, non_empty_vec};

/// One entry of the flattened type registry.
///
/// Struct members are stored by name; each name is itself a key in the
/// document's `types` mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderTypeDef {
    pub name: String,
    pub kind: ShaderTypeKind,
    #[serde(rename = "type")]
    pub ty: ShaderVarType,
    #[serde(skip_serializing_if = "is_default")]
    #[serde(default)]
    pub columns: u32,
    #[serde(skip_serializing_if = "is_default")]
    #[serde(default)]
    pub rows: u32,
    /// array element count, zero for non-arrays
    #[serde(skip_serializing_if = "is_default")]
    #[serde(default)]
    pub length: u32,
    #[serde(skip_serializing_if = "is_default")]
    #[serde(default)]
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub members: Option<Vec<String>>,
}

impl ShaderTypeDef {
    pub fn normalized(mut self) -> Self {
        self.members = non_empty_vec(self.members);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderTypeKind {
    #[default]
    Scalar,
    Vector,
    MatrixRowMajor,
    MatrixColumnMajor,
    Object,
    Struct,
    Class,
    Pointer,
    DWord,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderVarType {
    Void,
    Bool,
    UInt8,
    Int,
    UInt,
    Float,
    Double,
    Min8Float,
    Min10Float,
    Min16Float,
    Min12Int,
    Min16Int,
    Min16UInt,
    Int16,
    UInt16,
    Float16,
    Int64,
    UInt64,
    DWord,
    String,
    Texture,
    Texture1D,
    Texture2D,
    Texture3D,
    TextureCube,
    Texture1DArray,
    Texture2DArray,
    TextureCubeArray,
    Texture2DMs,
    Texture2DArrayMs,
    Sampler,
    Sampler1D,
    Sampler2D,
    Sampler3D,
    SamplerCube,
    RwTexture1D,
    RwTexture2D,
    RwTexture3D,
    RwTexture1DArray,
    RwTexture2DArray,
    CBuffer,
    TBuffer,
    Buffer,
    RwBuffer,
    ByteAddressBuffer,
    RwByteAddressBuffer,
    StructuredBuffer,
    RwStructuredBuffer,
    AppendStructuredBuffer,
    ConsumeStructuredBuffer,
    RenderTargetView,
    DepthStencilView,
    Blend,
    Rasterizer,
    DepthStencil,
    #[default]
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_names_fall_back() {
        let def: ShaderTypeDef =
            serde_json::from_str(r#"{"name":"half8","kind":"Tensor","type":"Float8"}"#).unwrap();

        assert_eq!(def.kind, ShaderTypeKind::Unknown);
        assert_eq!(def.ty, ShaderVarType::Unknown);
        assert_eq!(def.columns, 0);
        assert_eq!(def.members, None);
    }
}
