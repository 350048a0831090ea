use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::ShaderBindMetaExt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderBindMeta {
    pub name: String,
    pub flags: ShaderResourceFlags,
    pub point: u32,
    pub count: u32,
    pub space: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub srv: Option<ShaderSrvBindMeta>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub exts: Vec<ShaderBindMetaExt>,
}

/// the texel shape of a bound view, present only when the backend reports one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderSrvBindMeta {
    pub storage: ShaderSrvStorage,
    pub dimension: ShaderSrvDimension,
    pub num_samples: u32,
}

bitflags! {
    /// Capability and shape bits of a bound resource.
    ///
    /// Composite kinds are unions of their base bits, so a single bit test such as
    /// `flags.contains(ShaderResourceFlags::UAV)` holds for every UAV flavour.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ShaderResourceFlags: u32 {
        const CBV = 1 << 0;
        const SRV = 1 << 1;
        const UAV = 1 << 2;

        const BUFFER = 1 << 3;
        const TEXTURE = 1 << 4;
        const SAMPLER = 1 << 5;

        const UNIFORM = 1 << 6;

        const IS_STRUCTURED = 1 << 10;
        const IS_BYTE_ADDRESS = 1 << 11;

        const COUNTER = 1 << 16;
        const APPEND = 1 << 17;
        const CONSUME = 1 << 18;

        const ACCELERATION_STRUCTURE = 1 << 20;
        const FEEDBACK_TEXTURE = 1 << 21;

        const CBUFFER = Self::CBV.bits() | Self::BUFFER.bits() | Self::UNIFORM.bits();
        const TBUFFER = Self::SRV.bits() | Self::BUFFER.bits() | Self::UNIFORM.bits();

        const RW_BUFFER = Self::BUFFER.bits() | Self::UAV.bits();
        const STRUCTURED = Self::IS_STRUCTURED.bits() | Self::BUFFER.bits() | Self::SRV.bits();
        const RW_STRUCTURED = Self::IS_STRUCTURED.bits() | Self::BUFFER.bits() | Self::UAV.bits();
        const BYTE_ADDRESS = Self::IS_BYTE_ADDRESS.bits() | Self::BUFFER.bits() | Self::SRV.bits();
        const RW_BYTE_ADDRESS =
            Self::IS_BYTE_ADDRESS.bits() | Self::BUFFER.bits() | Self::UAV.bits();

        const APPEND_STRUCTURED_BUFFER = Self::APPEND.bits() | Self::RW_STRUCTURED.bits();
        const CONSUME_STRUCTURED_BUFFER = Self::CONSUME.bits() | Self::RW_STRUCTURED.bits();
        const RW_STRUCTURED_WITH_COUNTER = Self::COUNTER.bits() | Self::RW_STRUCTURED.bits();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderSrvDimension {
    Buffer,
    Texture1D,
    Texture1DArray,
    Texture2D,
    Texture2DMs,
    Texture2DArray,
    Texture2DArrayMs,
    Texture3D,
    TextureCube,
    TextureCubeArray,
    BufferEx,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderSrvStorage {
    UNorm,
    SNorm,
    SInt,
    UInt,
    Float,
    Double,
    Continued,
    Mixed,
    #[default]
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_flags_contain_their_base_bits() {
        let flags = ShaderResourceFlags::RW_STRUCTURED_WITH_COUNTER;
        assert!(flags.contains(ShaderResourceFlags::UAV));
        assert!(flags.contains(ShaderResourceFlags::IS_STRUCTURED));
        assert!(flags.contains(ShaderResourceFlags::COUNTER));
        assert!(flags.contains(ShaderResourceFlags::BUFFER));
        assert!(!flags.contains(ShaderResourceFlags::SRV));

        assert!(ShaderResourceFlags::APPEND_STRUCTURED_BUFFER.contains(ShaderResourceFlags::UAV));
        assert!(ShaderResourceFlags::CBUFFER.contains(ShaderResourceFlags::CBV));
        assert!(ShaderResourceFlags::TBUFFER.contains(ShaderResourceFlags::SRV));
    }

    #[test]
    fn flags_serialize_as_names() {
        let json = serde_json::to_string(&ShaderResourceFlags::SAMPLER).unwrap();
        assert_eq!(json, r#""SAMPLER""#);

        let parsed: ShaderResourceFlags =
            serde_json::from_str(r#""CBV | BUFFER | UNIFORM""#).unwrap();
        assert_eq!(parsed, ShaderResourceFlags::CBUFFER);
    }

    #[test]
    fn srv_shape_names() {
        let srv = ShaderSrvBindMeta {
            storage: ShaderSrvStorage::UNorm,
            dimension: ShaderSrvDimension::TextureCube,
            num_samples: 1,
        };
        let json = serde_json::to_string(&srv).unwrap();
        assert_eq!(
            json,
            r#"{"storage":"UNorm","dimension":"TextureCube","num_samples":1}"#
        );

        let parsed: ShaderSrvBindMeta =
            serde_json::from_str(r#"{"storage":"Bc7","dimension":"Texture5D","num_samples":1}"#)
                .unwrap();
        assert_eq!(parsed.storage, ShaderSrvStorage::Unknown);
        assert_eq!(parsed.dimension, ShaderSrvDimension::Unknown);
    }
}
