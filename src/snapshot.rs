//! Recorded D3D12 reflection data.
//!
//! A snapshot holds the same descriptors the native reflection interface
//! hands out, so it can stand in for a live reflection handle. Types live in
//! an index arena; member and variable type references are indices into it,
//! which lets shared and self-referencing type graphs be recorded as-is.

use serde::{Deserialize, Serialize};

use crate::error::{ReflectError, Result};
use crate::reflection::native::*;
use crate::reflection::{ReflectionProvider, ShaderReflection};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectionSnapshot {
    pub version: u32,
    pub creator: Option<String>,
    pub flags: u32,
    pub thread_group_size: [u32; 3],
    pub min_feature_level: u32,
    pub requires_flags: u64,
    pub is_sample_frequency_shader: bool,
    pub bindings: Vec<NativeInputBindDesc>,
    pub constant_buffers: Vec<SnapshotConstantBuffer>,
    pub types: Vec<SnapshotType>,
    pub inputs: Vec<NativeParameterDesc>,
    pub outputs: Vec<NativeParameterDesc>,
    pub patch_constants: Vec<NativeParameterDesc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConstantBuffer {
    pub desc: NativeBufferDesc,
    pub variables: Vec<SnapshotVariable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotVariable {
    pub desc: NativeVariableDesc,
    /// index into `ReflectionSnapshot::types`
    pub ty: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotType {
    pub desc: NativeTypeDesc,
    /// indices into `ReflectionSnapshot::types`, in declaration order
    pub members: Vec<usize>,
}

impl ReflectionSnapshot {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(ReflectError::creation_failed)
    }

    fn constant_buffer(&self, index: u32) -> Result<&SnapshotConstantBuffer> {
        lookup(&self.constant_buffers, index)
            .ok_or_else(|| ReflectError::read_failed(format!("constant buffer {index}")))
    }

    fn variable(&self, buffer: u32, index: u32) -> Result<&SnapshotVariable> {
        let cb = self.constant_buffer(buffer)?;
        lookup(&cb.variables, index).ok_or_else(|| {
            ReflectError::read_failed(format!("variable {index} of constant buffer {buffer}"))
        })
    }

    fn ty(&self, ty: usize) -> Result<&SnapshotType> {
        self.types
            .get(ty)
            .ok_or_else(|| ReflectError::read_failed(format!("type {ty}")))
    }
}

fn lookup<T>(items: &[T], index: u32) -> Option<&T> {
    items.get(usize::try_from(index).ok()?)
}

fn count<T>(items: &[T]) -> u32 {
    u32::try_from(items.len()).unwrap_or(u32::MAX)
}

fn parameter(
    params: &[NativeParameterDesc],
    what: &str,
    index: u32,
) -> Result<NativeParameterDesc> {
    lookup(params, index)
        .cloned()
        .ok_or_else(|| ReflectError::read_failed(format!("{what} parameter {index}")))
}

impl ShaderReflection for ReflectionSnapshot {
    type TypeHandle = usize;

    fn desc(&self) -> Result<NativeShaderDesc> {
        Ok(NativeShaderDesc {
            version: self.version,
            creator: self.creator.clone(),
            flags: self.flags,
            constant_buffers: count(&self.constant_buffers),
            bound_resources: count(&self.bindings),
            input_parameters: count(&self.inputs),
            output_parameters: count(&self.outputs),
            patch_constant_parameters: count(&self.patch_constants),
        })
    }

    fn thread_group_size(&self) -> [u32; 3] {
        self.thread_group_size
    }

    fn min_feature_level(&self) -> Result<u32> {
        Ok(self.min_feature_level)
    }

    fn requires_flags(&self) -> u64 {
        self.requires_flags
    }

    fn is_sample_frequency_shader(&self) -> bool {
        self.is_sample_frequency_shader
    }

    fn resource_binding_desc(&self, index: u32) -> Result<NativeInputBindDesc> {
        lookup(&self.bindings, index)
            .cloned()
            .ok_or_else(|| ReflectError::read_failed(format!("resource binding {index}")))
    }

    fn constant_buffer_desc(&self, index: u32) -> Result<NativeBufferDesc> {
        let cb = self.constant_buffer(index)?;
        Ok(NativeBufferDesc {
            variables: count(&cb.variables),
            ..cb.desc.clone()
        })
    }

    fn variable_desc(&self, buffer: u32, index: u32) -> Result<NativeVariableDesc> {
        Ok(self.variable(buffer, index)?.desc.clone())
    }

    fn variable_type(&self, buffer: u32, index: u32) -> Result<usize> {
        Ok(self.variable(buffer, index)?.ty)
    }

    fn type_desc(&self, ty: usize) -> Result<NativeTypeDesc> {
        let ty = self.ty(ty)?;
        Ok(NativeTypeDesc {
            members: count(&ty.members),
            ..ty.desc.clone()
        })
    }

    fn member_type(&self, ty: usize, index: u32) -> Result<usize> {
        let member = lookup(&self.ty(ty)?.members, index)
            .ok_or_else(|| ReflectError::read_failed(format!("member {index} of type {ty}")))?;
        // an index past the arena is reported by the following `type_desc` read
        Ok(*member)
    }

    fn input_parameter_desc(&self, index: u32) -> Result<NativeParameterDesc> {
        parameter(&self.inputs, "input", index)
    }

    fn output_parameter_desc(&self, index: u32) -> Result<NativeParameterDesc> {
        parameter(&self.outputs, "output", index)
    }

    fn patch_constant_parameter_desc(&self, index: u32) -> Result<NativeParameterDesc> {
        parameter(&self.patch_constants, "patch constant", index)
    }
}

/// reads snapshot json as the "compiled shader" input
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotProvider;

impl ReflectionProvider for SnapshotProvider {
    type Reflection = ReflectionSnapshot;

    fn create_reflection(&self, bytes: &[u8]) -> Result<ReflectionSnapshot> {
        ReflectionSnapshot::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_fails_creation() {
        let err = SnapshotProvider
            .create_reflection(b"DXBC\x00\x01garbage")
            .unwrap_err();
        assert!(matches!(err, ReflectError::ReflectionCreationFailed { .. }));
    }

    #[test]
    fn counts_follow_recorded_entries() {
        let snapshot = ReflectionSnapshot::from_slice(
            br#"{
                "version": 65616,
                "bindings": [{ "name": "a" }, { "name": "b" }],
                "constant_buffers": [
                    { "desc": { "name": "cb", "variables": 9 }, "variables": [{ "ty": 0 }] }
                ],
                "types": [{ "desc": { "name": "float" } }]
            }"#,
        )
        .unwrap();

        let desc = snapshot.desc().unwrap();
        assert_eq!(desc.bound_resources, 2);
        assert_eq!(desc.constant_buffers, 1);
        assert_eq!(snapshot.constant_buffer_desc(0).unwrap().variables, 1);
        assert!(snapshot.resource_binding_desc(2).is_err());
        assert!(matches!(
            snapshot.variable_desc(0, 1),
            Err(ReflectError::DescriptorReadFailed(_))
        ));
    }
}
