//! Raw D3D12 reflection codes to portable metadata enums.
//!
//! Every mapping is total: unrecognized codes fall back to the portable
//! `Unknown`-style value and are reported at warn level.

use log::*;

use super::native::*;
use crate::meta::*;

pub fn version_kind(version: u32) -> u32 {
    (version & 0xffff_0000) >> 16
}

pub fn version_major(version: u32) -> u32 {
    (version & 0x0000_00f0) >> 4
}

pub fn version_minor(version: u32) -> u32 {
    version & 0x0000_000f
}

pub fn version_to_stage(version: u32) -> ShaderStage {
    match version_kind(version) {
        SHVER_PIXEL_SHADER => ShaderStage::Pixel,
        SHVER_VERTEX_SHADER => ShaderStage::Vertex,
        SHVER_COMPUTE_SHADER => ShaderStage::Compute,
        SHVER_LIBRARY => ShaderStage::Library,
        SHVER_MESH_SHADER => ShaderStage::Mesh,
        SHVER_AMPLIFICATION_SHADER => ShaderStage::Task,
        _ => ShaderStage::Other,
    }
}

/// shader model text such as `cs_6_5`
pub fn version_to_string(version: u32) -> String {
    let prefix = match version_kind(version) {
        SHVER_PIXEL_SHADER => "ps",
        SHVER_VERTEX_SHADER => "vs",
        SHVER_GEOMETRY_SHADER => "gs",
        SHVER_HULL_SHADER => "hs",
        SHVER_DOMAIN_SHADER => "ds",
        SHVER_COMPUTE_SHADER => "cs",
        SHVER_LIBRARY => "lib",
        SHVER_RAY_GENERATION_SHADER => "ray_generation",
        SHVER_INTERSECTION_SHADER => "intersection",
        SHVER_ANY_HIT_SHADER => "any_hit",
        SHVER_CLOSEST_HIT_SHADER => "closest_hit",
        SHVER_MISS_SHADER => "miss",
        SHVER_CALLABLE_SHADER => "callable",
        SHVER_MESH_SHADER => "ms",
        SHVER_AMPLIFICATION_SHADER => "as",
        _ => "unknown",
    };

    format!(
        "{prefix}_{}_{}",
        version_major(version),
        version_minor(version)
    )
}

pub fn resource_flags(input_type: u32) -> ShaderResourceFlags {
    match input_type {
        SIT_CBUFFER => ShaderResourceFlags::CBUFFER,
        SIT_TBUFFER => ShaderResourceFlags::TBUFFER,
        SIT_TEXTURE => ShaderResourceFlags::TEXTURE,
        SIT_SAMPLER => ShaderResourceFlags::SAMPLER,
        SIT_UAV_RWTYPED => ShaderResourceFlags::RW_BUFFER,
        SIT_STRUCTURED => ShaderResourceFlags::STRUCTURED,
        SIT_UAV_RWSTRUCTURED => ShaderResourceFlags::RW_STRUCTURED,
        SIT_BYTEADDRESS => ShaderResourceFlags::BYTE_ADDRESS,
        SIT_UAV_RWBYTEADDRESS => ShaderResourceFlags::RW_BYTE_ADDRESS,
        SIT_UAV_APPEND_STRUCTURED => ShaderResourceFlags::APPEND_STRUCTURED_BUFFER,
        SIT_UAV_CONSUME_STRUCTURED => ShaderResourceFlags::CONSUME_STRUCTURED_BUFFER,
        SIT_UAV_RWSTRUCTURED_WITH_COUNTER => ShaderResourceFlags::RW_STRUCTURED_WITH_COUNTER,
        SIT_RTACCELERATIONSTRUCTURE => ShaderResourceFlags::ACCELERATION_STRUCTURE,
        SIT_UAV_FEEDBACKTEXTURE => ShaderResourceFlags::FEEDBACK_TEXTURE,
        other => {
            warn!("unknown shader input type: {other}");
            ShaderResourceFlags::empty()
        }
    }
}

pub fn srv_storage(return_type: u32) -> ShaderSrvStorage {
    match return_type {
        RETURN_TYPE_NONE => ShaderSrvStorage::Unknown,
        RETURN_TYPE_UNORM => ShaderSrvStorage::UNorm,
        RETURN_TYPE_SNORM => ShaderSrvStorage::SNorm,
        RETURN_TYPE_SINT => ShaderSrvStorage::SInt,
        RETURN_TYPE_UINT => ShaderSrvStorage::UInt,
        RETURN_TYPE_FLOAT => ShaderSrvStorage::Float,
        RETURN_TYPE_MIXED => ShaderSrvStorage::Mixed,
        RETURN_TYPE_DOUBLE => ShaderSrvStorage::Double,
        RETURN_TYPE_CONTINUED => ShaderSrvStorage::Continued,
        other => {
            warn!("unknown resource return type: {other}");
            ShaderSrvStorage::Unknown
        }
    }
}

pub fn srv_dimension(dimension: u32) -> ShaderSrvDimension {
    match dimension {
        SRV_DIMENSION_UNKNOWN => ShaderSrvDimension::Unknown,
        SRV_DIMENSION_BUFFER => ShaderSrvDimension::Buffer,
        SRV_DIMENSION_TEXTURE1D => ShaderSrvDimension::Texture1D,
        SRV_DIMENSION_TEXTURE1DARRAY => ShaderSrvDimension::Texture1DArray,
        SRV_DIMENSION_TEXTURE2D => ShaderSrvDimension::Texture2D,
        SRV_DIMENSION_TEXTURE2DARRAY => ShaderSrvDimension::Texture2DArray,
        SRV_DIMENSION_TEXTURE2DMS => ShaderSrvDimension::Texture2DMs,
        SRV_DIMENSION_TEXTURE2DMSARRAY => ShaderSrvDimension::Texture2DArrayMs,
        SRV_DIMENSION_TEXTURE3D => ShaderSrvDimension::Texture3D,
        SRV_DIMENSION_TEXTURECUBE => ShaderSrvDimension::TextureCube,
        SRV_DIMENSION_TEXTURECUBEARRAY => ShaderSrvDimension::TextureCubeArray,
        SRV_DIMENSION_BUFFEREX => ShaderSrvDimension::BufferEx,
        other => {
            warn!("unknown srv dimension: {other}");
            ShaderSrvDimension::Unknown
        }
    }
}

pub fn component_type(component_type: u32) -> ShaderVectorComponentType {
    match component_type {
        REGISTER_COMPONENT_UNKNOWN => ShaderVectorComponentType::Unknown,
        REGISTER_COMPONENT_UINT32 => ShaderVectorComponentType::UInt32,
        REGISTER_COMPONENT_SINT32 => ShaderVectorComponentType::SInt32,
        REGISTER_COMPONENT_FLOAT32 => ShaderVectorComponentType::Float32,
        other => {
            warn!("unknown register component type: {other}");
            ShaderVectorComponentType::Unknown
        }
    }
}

pub fn semantic(name: u32) -> ShaderSemantic {
    match name {
        NAME_UNDEFINED => ShaderSemantic::Undefined,
        NAME_POSITION => ShaderSemantic::Position,
        NAME_CLIP_DISTANCE => ShaderSemantic::ClipDistance,
        NAME_CULL_DISTANCE => ShaderSemantic::CullDistance,
        NAME_RENDER_TARGET_ARRAY_INDEX => ShaderSemantic::RenderTargetArrayIndex,
        NAME_VIEWPORT_ARRAY_INDEX => ShaderSemantic::ViewportArrayIndex,
        NAME_VERTEX_ID => ShaderSemantic::VertexId,
        NAME_PRIMITIVE_ID => ShaderSemantic::PrimitiveId,
        NAME_INSTANCE_ID => ShaderSemantic::InstanceId,
        NAME_IS_FRONT_FACE => ShaderSemantic::IsFrontFace,
        NAME_SAMPLE_INDEX => ShaderSemantic::SampleIndex,
        NAME_FINAL_QUAD_EDGE_TESSFACTOR => ShaderSemantic::FinalQuadEdgeTessFactor,
        NAME_FINAL_QUAD_INSIDE_TESSFACTOR => ShaderSemantic::FinalQuadInsideTessFactor,
        NAME_FINAL_TRI_EDGE_TESSFACTOR => ShaderSemantic::FinalTriEdgeTessFactor,
        NAME_FINAL_TRI_INSIDE_TESSFACTOR => ShaderSemantic::FinalTriInsideTessFactor,
        NAME_FINAL_LINE_DETAIL_TESSFACTOR => ShaderSemantic::FinalLineDetailTessFactor,
        NAME_FINAL_LINE_DENSITY_TESSFACTOR => ShaderSemantic::FinalLineDensityTessFactor,
        NAME_BARYCENTRICS => ShaderSemantic::Barycentrics,
        NAME_SHADINGRATE => ShaderSemantic::ShadingRate,
        NAME_CULLPRIMITIVE => ShaderSemantic::CullPrimitive,
        NAME_TARGET => ShaderSemantic::Target,
        NAME_DEPTH => ShaderSemantic::Depth,
        NAME_COVERAGE => ShaderSemantic::Coverage,
        NAME_DEPTH_GREATER_EQUAL => ShaderSemantic::DepthGreaterEqual,
        NAME_DEPTH_LESS_EQUAL => ShaderSemantic::DepthLessEqual,
        NAME_STENCIL_REF => ShaderSemantic::StencilRef,
        NAME_INNER_COVERAGE => ShaderSemantic::InnerCoverage,
        other => {
            warn!("unknown system value name: {other}");
            ShaderSemantic::Undefined
        }
    }
}

pub fn min_precision(precision: u32) -> ShaderMinPrecision {
    match precision {
        MIN_PRECISION_DEFAULT => ShaderMinPrecision::Default,
        MIN_PRECISION_FLOAT_16 => ShaderMinPrecision::Float16,
        MIN_PRECISION_FLOAT_2_8 => ShaderMinPrecision::Float10,
        MIN_PRECISION_SINT_16 => ShaderMinPrecision::SInt16,
        MIN_PRECISION_UINT_16 => ShaderMinPrecision::UInt16,
        MIN_PRECISION_ANY_16 => ShaderMinPrecision::Any16,
        MIN_PRECISION_ANY_10 => ShaderMinPrecision::Any10,
        other => {
            warn!("unknown min precision: {other}");
            ShaderMinPrecision::Default
        }
    }
}

pub fn type_kind(class: u32) -> ShaderTypeKind {
    match class {
        SVC_SCALAR => ShaderTypeKind::Scalar,
        SVC_VECTOR => ShaderTypeKind::Vector,
        SVC_MATRIX_ROWS => ShaderTypeKind::MatrixRowMajor,
        SVC_MATRIX_COLUMNS => ShaderTypeKind::MatrixColumnMajor,
        SVC_OBJECT => ShaderTypeKind::Object,
        SVC_STRUCT => ShaderTypeKind::Struct,
        SVC_INTERFACE_CLASS => ShaderTypeKind::Class,
        SVC_INTERFACE_POINTER => ShaderTypeKind::Pointer,
        SVC_FORCE_DWORD => ShaderTypeKind::DWord,
        other => {
            warn!("unknown shader variable class: {other}");
            ShaderTypeKind::Unknown
        }
    }
}

pub fn var_type(ty: u32) -> ShaderVarType {
    match ty {
        SVT_VOID => ShaderVarType::Void,
        SVT_BOOL => ShaderVarType::Bool,
        SVT_INT => ShaderVarType::Int,
        SVT_FLOAT => ShaderVarType::Float,
        SVT_STRING => ShaderVarType::String,
        SVT_TEXTURE => ShaderVarType::Texture,
        SVT_TEXTURE1D => ShaderVarType::Texture1D,
        SVT_TEXTURE2D => ShaderVarType::Texture2D,
        SVT_TEXTURE3D => ShaderVarType::Texture3D,
        SVT_TEXTURECUBE => ShaderVarType::TextureCube,
        SVT_SAMPLER => ShaderVarType::Sampler,
        SVT_SAMPLER1D => ShaderVarType::Sampler1D,
        SVT_SAMPLER2D => ShaderVarType::Sampler2D,
        SVT_SAMPLER3D => ShaderVarType::Sampler3D,
        SVT_SAMPLERCUBE => ShaderVarType::SamplerCube,
        SVT_UINT => ShaderVarType::UInt,
        SVT_UINT8 => ShaderVarType::UInt8,
        SVT_RASTERIZER => ShaderVarType::Rasterizer,
        SVT_DEPTHSTENCIL => ShaderVarType::DepthStencil,
        SVT_BLEND => ShaderVarType::Blend,
        SVT_BUFFER => ShaderVarType::Buffer,
        SVT_CBUFFER => ShaderVarType::CBuffer,
        SVT_TBUFFER => ShaderVarType::TBuffer,
        SVT_TEXTURE1DARRAY => ShaderVarType::Texture1DArray,
        SVT_TEXTURE2DARRAY => ShaderVarType::Texture2DArray,
        SVT_RENDERTARGETVIEW => ShaderVarType::RenderTargetView,
        SVT_DEPTHSTENCILVIEW => ShaderVarType::DepthStencilView,
        SVT_TEXTURE2DMS => ShaderVarType::Texture2DMs,
        SVT_TEXTURE2DMSARRAY => ShaderVarType::Texture2DArrayMs,
        SVT_TEXTURECUBEARRAY => ShaderVarType::TextureCubeArray,
        SVT_DOUBLE => ShaderVarType::Double,
        SVT_RWTEXTURE1D => ShaderVarType::RwTexture1D,
        SVT_RWTEXTURE1DARRAY => ShaderVarType::RwTexture1DArray,
        SVT_RWTEXTURE2D => ShaderVarType::RwTexture2D,
        SVT_RWTEXTURE2DARRAY => ShaderVarType::RwTexture2DArray,
        SVT_RWTEXTURE3D => ShaderVarType::RwTexture3D,
        SVT_RWBUFFER => ShaderVarType::RwBuffer,
        SVT_BYTEADDRESS_BUFFER => ShaderVarType::ByteAddressBuffer,
        SVT_RWBYTEADDRESS_BUFFER => ShaderVarType::RwByteAddressBuffer,
        SVT_STRUCTURED_BUFFER => ShaderVarType::StructuredBuffer,
        SVT_RWSTRUCTURED_BUFFER => ShaderVarType::RwStructuredBuffer,
        SVT_APPEND_STRUCTURED_BUFFER => ShaderVarType::AppendStructuredBuffer,
        SVT_CONSUME_STRUCTURED_BUFFER => ShaderVarType::ConsumeStructuredBuffer,
        SVT_MIN8FLOAT => ShaderVarType::Min8Float,
        SVT_MIN10FLOAT => ShaderVarType::Min10Float,
        SVT_MIN16FLOAT => ShaderVarType::Min16Float,
        SVT_MIN12INT => ShaderVarType::Min12Int,
        SVT_MIN16INT => ShaderVarType::Min16Int,
        SVT_MIN16UINT => ShaderVarType::Min16UInt,
        SVT_INT16 => ShaderVarType::Int16,
        SVT_UINT16 => ShaderVarType::UInt16,
        SVT_FLOAT16 => ShaderVarType::Float16,
        SVT_INT64 => ShaderVarType::Int64,
        SVT_UINT64 => ShaderVarType::UInt64,
        SVT_FORCE_DWORD => ShaderVarType::DWord,
        other => {
            // shader object types (pixel/vertex shader, interface pointer, ...) land here too
            warn!("unknown shader variable type: {other}");
            ShaderVarType::Unknown
        }
    }
}

pub fn cbuffer_kind(kind: u32) -> String {
    match kind {
        CT_CBUFFER => "cbuffer".to_string(),
        CT_TBUFFER => "tbuffer".to_string(),
        CT_INTERFACE_POINTERS => "interface_pointers".to_string(),
        CT_RESOURCE_BIND_INFO => "resource_bind_info".to_string(),
        other => {
            warn!("unknown constant buffer type: {other}");
            format!("{other:#x}")
        }
    }
}

pub fn feature_level(level: u32) -> String {
    let name = match level {
        FEATURE_LEVEL_1_0_GENERIC => "1_0_generic",
        FEATURE_LEVEL_1_0_CORE => "1_0_core",
        FEATURE_LEVEL_9_1 => "9_1",
        FEATURE_LEVEL_9_2 => "9_2",
        FEATURE_LEVEL_9_3 => "9_3",
        FEATURE_LEVEL_10_0 => "10_0",
        FEATURE_LEVEL_10_1 => "10_1",
        FEATURE_LEVEL_11_0 => "11_0",
        FEATURE_LEVEL_11_1 => "11_1",
        FEATURE_LEVEL_12_0 => "12_0",
        FEATURE_LEVEL_12_1 => "12_1",
        FEATURE_LEVEL_12_2 => "12_2",
        other => {
            warn!("unknown feature level: {other:#x}");
            return format!("{other:#x}");
        }
    };

    name.to_string()
}
