//! Descriptor structures read from a D3D12 shader reflection handle.
//!
//! Enumerations are kept as their raw codes so values newer than this crate
//! still round through the snapshot format and reach the translator intact.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeShaderDesc {
    pub version: u32,
    pub creator: Option<String>,
    pub flags: u32,
    pub constant_buffers: u32,
    pub bound_resources: u32,
    pub input_parameters: u32,
    pub output_parameters: u32,
    pub patch_constant_parameters: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeInputBindDesc {
    pub name: String,
    pub input_type: u32,
    pub bind_point: u32,
    pub bind_count: u32,
    pub flags: u32,
    pub return_type: u32,
    pub dimension: u32,
    pub num_samples: u32,
    pub space: u32,
    pub uid: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeBufferDesc {
    pub name: String,
    pub kind: u32,
    pub variables: u32,
    pub size: u32,
    pub flags: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeVariableDesc {
    pub name: String,
    pub start_offset: u32,
    pub size: u32,
    pub flags: u32,
    pub default_value: Option<Vec<u8>>,
    pub start_texture: u32,
    pub texture_size: u32,
    pub start_sampler: u32,
    pub sampler_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeTypeDesc {
    pub class: u32,
    pub ty: u32,
    pub rows: u32,
    pub columns: u32,
    pub elements: u32,
    pub members: u32,
    pub offset: u32,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeParameterDesc {
    pub semantic_name: Option<String>,
    pub semantic_index: u32,
    pub register: u32,
    pub system_value_type: u32,
    pub component_type: u32,
    pub mask: u8,
    pub read_write_mask: u8,
    pub stream: u32,
    pub min_precision: u32,
}

// D3D12_SHADER_VERSION_TYPE
pub const SHVER_PIXEL_SHADER: u32 = 0;
pub const SHVER_VERTEX_SHADER: u32 = 1;
pub const SHVER_GEOMETRY_SHADER: u32 = 2;
pub const SHVER_HULL_SHADER: u32 = 3;
pub const SHVER_DOMAIN_SHADER: u32 = 4;
pub const SHVER_COMPUTE_SHADER: u32 = 5;
pub const SHVER_LIBRARY: u32 = 6;
pub const SHVER_RAY_GENERATION_SHADER: u32 = 7;
pub const SHVER_INTERSECTION_SHADER: u32 = 8;
pub const SHVER_ANY_HIT_SHADER: u32 = 9;
pub const SHVER_CLOSEST_HIT_SHADER: u32 = 10;
pub const SHVER_MISS_SHADER: u32 = 11;
pub const SHVER_CALLABLE_SHADER: u32 = 12;
pub const SHVER_MESH_SHADER: u32 = 13;
pub const SHVER_AMPLIFICATION_SHADER: u32 = 14;

// D3D_SHADER_INPUT_TYPE
pub const SIT_CBUFFER: u32 = 0;
pub const SIT_TBUFFER: u32 = 1;
pub const SIT_TEXTURE: u32 = 2;
pub const SIT_SAMPLER: u32 = 3;
pub const SIT_UAV_RWTYPED: u32 = 4;
pub const SIT_STRUCTURED: u32 = 5;
pub const SIT_UAV_RWSTRUCTURED: u32 = 6;
pub const SIT_BYTEADDRESS: u32 = 7;
pub const SIT_UAV_RWBYTEADDRESS: u32 = 8;
pub const SIT_UAV_APPEND_STRUCTURED: u32 = 9;
pub const SIT_UAV_CONSUME_STRUCTURED: u32 = 10;
pub const SIT_UAV_RWSTRUCTURED_WITH_COUNTER: u32 = 11;
pub const SIT_RTACCELERATIONSTRUCTURE: u32 = 12;
pub const SIT_UAV_FEEDBACKTEXTURE: u32 = 13;

// D3D_RESOURCE_RETURN_TYPE, zero means "no return type"
pub const RETURN_TYPE_NONE: u32 = 0;
pub const RETURN_TYPE_UNORM: u32 = 1;
pub const RETURN_TYPE_SNORM: u32 = 2;
pub const RETURN_TYPE_SINT: u32 = 3;
pub const RETURN_TYPE_UINT: u32 = 4;
pub const RETURN_TYPE_FLOAT: u32 = 5;
pub const RETURN_TYPE_MIXED: u32 = 6;
pub const RETURN_TYPE_DOUBLE: u32 = 7;
pub const RETURN_TYPE_CONTINUED: u32 = 8;

// D3D_SRV_DIMENSION
pub const SRV_DIMENSION_UNKNOWN: u32 = 0;
pub const SRV_DIMENSION_BUFFER: u32 = 1;
pub const SRV_DIMENSION_TEXTURE1D: u32 = 2;
pub const SRV_DIMENSION_TEXTURE1DARRAY: u32 = 3;
pub const SRV_DIMENSION_TEXTURE2D: u32 = 4;
pub const SRV_DIMENSION_TEXTURE2DARRAY: u32 = 5;
pub const SRV_DIMENSION_TEXTURE2DMS: u32 = 6;
pub const SRV_DIMENSION_TEXTURE2DMSARRAY: u32 = 7;
pub const SRV_DIMENSION_TEXTURE3D: u32 = 8;
pub const SRV_DIMENSION_TEXTURECUBE: u32 = 9;
pub const SRV_DIMENSION_TEXTURECUBEARRAY: u32 = 10;
pub const SRV_DIMENSION_BUFFEREX: u32 = 11;

// D3D_REGISTER_COMPONENT_TYPE
pub const REGISTER_COMPONENT_UNKNOWN: u32 = 0;
pub const REGISTER_COMPONENT_UINT32: u32 = 1;
pub const REGISTER_COMPONENT_SINT32: u32 = 2;
pub const REGISTER_COMPONENT_FLOAT32: u32 = 3;

// D3D_NAME
pub const NAME_UNDEFINED: u32 = 0;
pub const NAME_POSITION: u32 = 1;
pub const NAME_CLIP_DISTANCE: u32 = 2;
pub const NAME_CULL_DISTANCE: u32 = 3;
pub const NAME_RENDER_TARGET_ARRAY_INDEX: u32 = 4;
pub const NAME_VIEWPORT_ARRAY_INDEX: u32 = 5;
pub const NAME_VERTEX_ID: u32 = 6;
pub const NAME_PRIMITIVE_ID: u32 = 7;
pub const NAME_INSTANCE_ID: u32 = 8;
pub const NAME_IS_FRONT_FACE: u32 = 9;
pub const NAME_SAMPLE_INDEX: u32 = 10;
pub const NAME_FINAL_QUAD_EDGE_TESSFACTOR: u32 = 11;
pub const NAME_FINAL_QUAD_INSIDE_TESSFACTOR: u32 = 12;
pub const NAME_FINAL_TRI_EDGE_TESSFACTOR: u32 = 13;
pub const NAME_FINAL_TRI_INSIDE_TESSFACTOR: u32 = 14;
pub const NAME_FINAL_LINE_DETAIL_TESSFACTOR: u32 = 15;
pub const NAME_FINAL_LINE_DENSITY_TESSFACTOR: u32 = 16;
pub const NAME_BARYCENTRICS: u32 = 23;
pub const NAME_SHADINGRATE: u32 = 24;
pub const NAME_CULLPRIMITIVE: u32 = 25;
pub const NAME_TARGET: u32 = 64;
pub const NAME_DEPTH: u32 = 65;
pub const NAME_COVERAGE: u32 = 66;
pub const NAME_DEPTH_GREATER_EQUAL: u32 = 67;
pub const NAME_DEPTH_LESS_EQUAL: u32 = 68;
pub const NAME_STENCIL_REF: u32 = 69;
pub const NAME_INNER_COVERAGE: u32 = 70;

// D3D_MIN_PRECISION
pub const MIN_PRECISION_DEFAULT: u32 = 0;
pub const MIN_PRECISION_FLOAT_16: u32 = 1;
pub const MIN_PRECISION_FLOAT_2_8: u32 = 2;
pub const MIN_PRECISION_SINT_16: u32 = 4;
pub const MIN_PRECISION_UINT_16: u32 = 5;
pub const MIN_PRECISION_ANY_16: u32 = 0xf0;
pub const MIN_PRECISION_ANY_10: u32 = 0xf1;

// D3D_SHADER_VARIABLE_CLASS
pub const SVC_SCALAR: u32 = 0;
pub const SVC_VECTOR: u32 = 1;
pub const SVC_MATRIX_ROWS: u32 = 2;
pub const SVC_MATRIX_COLUMNS: u32 = 3;
pub const SVC_OBJECT: u32 = 4;
pub const SVC_STRUCT: u32 = 5;
pub const SVC_INTERFACE_CLASS: u32 = 6;
pub const SVC_INTERFACE_POINTER: u32 = 7;
pub const SVC_FORCE_DWORD: u32 = 0x7fff_ffff;

// D3D_SHADER_VARIABLE_TYPE
pub const SVT_VOID: u32 = 0;
pub const SVT_BOOL: u32 = 1;
pub const SVT_INT: u32 = 2;
pub const SVT_FLOAT: u32 = 3;
pub const SVT_STRING: u32 = 4;
pub const SVT_TEXTURE: u32 = 5;
pub const SVT_TEXTURE1D: u32 = 6;
pub const SVT_TEXTURE2D: u32 = 7;
pub const SVT_TEXTURE3D: u32 = 8;
pub const SVT_TEXTURECUBE: u32 = 9;
pub const SVT_SAMPLER: u32 = 10;
pub const SVT_SAMPLER1D: u32 = 11;
pub const SVT_SAMPLER2D: u32 = 12;
pub const SVT_SAMPLER3D: u32 = 13;
pub const SVT_SAMPLERCUBE: u32 = 14;
pub const SVT_UINT: u32 = 19;
pub const SVT_UINT8: u32 = 20;
pub const SVT_RASTERIZER: u32 = 22;
pub const SVT_DEPTHSTENCIL: u32 = 23;
pub const SVT_BLEND: u32 = 24;
pub const SVT_BUFFER: u32 = 25;
pub const SVT_CBUFFER: u32 = 26;
pub const SVT_TBUFFER: u32 = 27;
pub const SVT_TEXTURE1DARRAY: u32 = 28;
pub const SVT_TEXTURE2DARRAY: u32 = 29;
pub const SVT_RENDERTARGETVIEW: u32 = 30;
pub const SVT_DEPTHSTENCILVIEW: u32 = 31;
pub const SVT_TEXTURE2DMS: u32 = 32;
pub const SVT_TEXTURE2DMSARRAY: u32 = 33;
pub const SVT_TEXTURECUBEARRAY: u32 = 34;
pub const SVT_DOUBLE: u32 = 39;
pub const SVT_RWTEXTURE1D: u32 = 40;
pub const SVT_RWTEXTURE1DARRAY: u32 = 41;
pub const SVT_RWTEXTURE2D: u32 = 42;
pub const SVT_RWTEXTURE2DARRAY: u32 = 43;
pub const SVT_RWTEXTURE3D: u32 = 44;
pub const SVT_RWBUFFER: u32 = 45;
pub const SVT_BYTEADDRESS_BUFFER: u32 = 46;
pub const SVT_RWBYTEADDRESS_BUFFER: u32 = 47;
pub const SVT_STRUCTURED_BUFFER: u32 = 48;
pub const SVT_RWSTRUCTURED_BUFFER: u32 = 49;
pub const SVT_APPEND_STRUCTURED_BUFFER: u32 = 50;
pub const SVT_CONSUME_STRUCTURED_BUFFER: u32 = 51;
pub const SVT_MIN8FLOAT: u32 = 52;
pub const SVT_MIN10FLOAT: u32 = 53;
pub const SVT_MIN16FLOAT: u32 = 54;
pub const SVT_MIN12INT: u32 = 55;
pub const SVT_MIN16INT: u32 = 56;
pub const SVT_MIN16UINT: u32 = 57;
pub const SVT_INT16: u32 = 58;
pub const SVT_UINT16: u32 = 59;
pub const SVT_FLOAT16: u32 = 60;
pub const SVT_INT64: u32 = 61;
pub const SVT_UINT64: u32 = 62;
pub const SVT_FORCE_DWORD: u32 = 0x7fff_ffff;

// D3D_CBUFFER_TYPE
pub const CT_CBUFFER: u32 = 0;
pub const CT_TBUFFER: u32 = 1;
pub const CT_INTERFACE_POINTERS: u32 = 2;
pub const CT_RESOURCE_BIND_INFO: u32 = 3;

// D3D_FEATURE_LEVEL
pub const FEATURE_LEVEL_1_0_GENERIC: u32 = 0x100;
pub const FEATURE_LEVEL_1_0_CORE: u32 = 0x1000;
pub const FEATURE_LEVEL_9_1: u32 = 0x9100;
pub const FEATURE_LEVEL_9_2: u32 = 0x9200;
pub const FEATURE_LEVEL_9_3: u32 = 0x9300;
pub const FEATURE_LEVEL_10_0: u32 = 0xa000;
pub const FEATURE_LEVEL_10_1: u32 = 0xa100;
pub const FEATURE_LEVEL_11_0: u32 = 0xb000;
pub const FEATURE_LEVEL_11_1: u32 = 0xb100;
pub const FEATURE_LEVEL_12_0: u32 = 0xc000;
pub const FEATURE_LEVEL_12_1: u32 = 0xc100;
pub const FEATURE_LEVEL_12_2: u32 = 0xc200;
