use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::is_default;

/// one element of an input, output or patch-constant signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderParam {
    #[serde(skip_serializing_if = "is_default")]
    #[serde(default)]
    pub sv: ShaderSemantic,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub slot: Option<String>,
    #[serde(skip_serializing_if = "is_default")]
    #[serde(default)]
    pub index: u32,
    pub register: u32,
    #[serde(skip_serializing_if = "ShaderVectorMask::is_empty")]
    #[serde(default)]
    pub mask: ShaderVectorMask,
    #[serde(skip_serializing_if = "ShaderVectorMask::is_empty")]
    #[serde(default)]
    pub rw_mask: ShaderVectorMask,
    pub storage: ShaderVectorComponentType,
    #[serde(skip_serializing_if = "is_default")]
    #[serde(default)]
    pub stream: u32,
    #[serde(skip_serializing_if = "is_default")]
    #[serde(default)]
    pub precision: ShaderMinPrecision,
}

bitflags! {
    /// Register components, rendered as swizzle text such as `xyz`.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ShaderVectorMask: u8 {
        const X = 1 << 0;
        const Y = 1 << 1;
        const Z = 1 << 2;
        const W = 1 << 3;
    }
}

const MASK_COMPONENTS: [(char, ShaderVectorMask); 4] = [
    ('x', ShaderVectorMask::X),
    ('y', ShaderVectorMask::Y),
    ('z', ShaderVectorMask::Z),
    ('w', ShaderVectorMask::W),
];

impl fmt::Display for ShaderVectorMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, component) in MASK_COMPONENTS {
            if self.contains(component) {
                write!(f, "{c}")?;
            }
        }

        Ok(())
    }
}

impl FromStr for ShaderVectorMask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().try_fold(Self::empty(), |mask, c| {
            MASK_COMPONENTS
                .iter()
                .find(|(name, _)| *name == c)
                .map(|(_, component)| mask | *component)
                .ok_or_else(|| format!("invalid vector mask component: {c:?}"))
        })
    }
}

impl Serialize for ShaderVectorMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShaderVectorMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderVectorComponentType {
    UInt32,
    SInt32,
    Float32,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderSemantic {
    Position,
    ClipDistance,
    CullDistance,
    RenderTargetArrayIndex,
    ViewportArrayIndex,
    VertexId,
    PrimitiveId,
    InstanceId,
    IsFrontFace,
    SampleIndex,
    FinalQuadEdgeTessFactor,
    FinalQuadInsideTessFactor,
    FinalTriEdgeTessFactor,
    FinalTriInsideTessFactor,
    FinalLineDetailTessFactor,
    FinalLineDensityTessFactor,
    Barycentrics,
    ShadingRate,
    CullPrimitive,
    Target,
    Depth,
    Coverage,
    DepthGreaterEqual,
    DepthLessEqual,
    StencilRef,
    InnerCoverage,
    #[default]
    #[serde(other)]
    Undefined,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderMinPrecision {
    Float16,
    Float10,
    SInt16,
    UInt16,
    Any16,
    Any10,
    #[default]
    #[serde(other)]
    Default,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_mask_text() {
        let mask = ShaderVectorMask::X | ShaderVectorMask::Y | ShaderVectorMask::W;
        assert_eq!(mask.to_string(), "xyw");
        assert_eq!("xyw".parse::<ShaderVectorMask>().unwrap(), mask);
        assert_eq!(ShaderVectorMask::all().to_string(), "xyzw");
        assert!("xq".parse::<ShaderVectorMask>().is_err());
    }

    #[test]
    fn default_fields_are_skipped() {
        let param = ShaderParam {
            sv: ShaderSemantic::Undefined,
            slot: Some("TEXCOORD".to_string()),
            index: 0,
            register: 1,
            mask: ShaderVectorMask::X | ShaderVectorMask::Y,
            rw_mask: ShaderVectorMask::empty(),
            storage: ShaderVectorComponentType::Float32,
            stream: 0,
            precision: ShaderMinPrecision::Default,
        };

        let json = serde_json::to_string(&param).unwrap();
        assert_eq!(
            json,
            r#"{"slot":"TEXCOORD","register":1,"mask":"xy","storage":"Float32"}"#
        );

        let parsed: ShaderParam = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, param);
    }

    #[test]
    fn unknown_names_fall_back() {
        let param: ShaderParam = serde_json::from_str(
            r#"{"sv":"Foveation","register":0,"storage":"Float64","precision":"Float8"}"#,
        )
        .unwrap();

        assert_eq!(param.sv, ShaderSemantic::Undefined);
        assert_eq!(param.storage, ShaderVectorComponentType::Unknown);
        assert_eq!(param.precision, ShaderMinPrecision::Default);
        assert_eq!(ShaderSemantic::default(), ShaderSemantic::Undefined);
    }
}
