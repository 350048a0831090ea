use std::collections::BTreeMap;

use super::native::*;
use super::{ShaderReflection, TypeRegistry, insert_first, translate};
use crate::error::{ReflectError, Result};
use crate::meta::*;

/// State owned by one document build.
///
/// Nothing here outlives the build, so independent builds never share a registry.
#[derive(Debug, Default)]
pub struct BuildContext {
    pub types: TypeRegistry,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_binding<R: ShaderReflection + ?Sized>(
        &mut self,
        reflection: &R,
        index: u32,
    ) -> Result<ShaderBindMeta> {
        let desc = reflection.resource_binding_desc(index)?;
        Ok(bind_meta(desc))
    }

    pub fn build_constant_buffer<R: ShaderReflection + ?Sized>(
        &mut self,
        reflection: &R,
        index: u32,
    ) -> Result<ConstantBufferMeta> {
        let desc = reflection.constant_buffer_desc(index)?;

        let mut vars = BTreeMap::new();
        for var_index in 0..desc.variables {
            let var = self.build_variable(reflection, index, var_index)?;
            insert_first(&mut vars, "variable", var.name.clone(), var);
        }

        let ext = ShaderResourceMetaExt::Dx12(Dx12ConstantBufferMetaExt {
            ty: Some(translate::cbuffer_kind(desc.kind)),
            flags: desc.flags,
        });

        let cb = ConstantBufferMeta {
            name: desc.name,
            size: desc.size,
            vars: Some(vars),
            exts: vec![ext],
        };

        Ok(cb.normalized())
    }

    /// reads one variable and resolves its declared type into the registry
    pub fn build_variable<R: ShaderReflection + ?Sized>(
        &mut self,
        reflection: &R,
        buffer: u32,
        index: u32,
    ) -> Result<ShaderVariableMeta> {
        let desc = reflection.variable_desc(buffer, index)?;
        let ty = reflection.variable_type(buffer, index)?;
        let type_name = self.types.resolve(reflection, ty)?;
        let defv = default_value(&desc.name, desc.size, desc.default_value)?;

        Ok(ShaderVariableMeta {
            name: desc.name,
            ty: type_name,
            data: OffsetSize::non_zero(desc.start_offset, desc.size),
            texture: OffsetSize::non_zero(desc.start_texture, desc.texture_size),
            sampler: OffsetSize::non_zero(desc.start_sampler, desc.sampler_size),
            defv,
            exts: vec![ShaderVariableMetaExt::Dx12(Dx12ShaderVariableMetaExt {
                flags: desc.flags,
            })],
        })
    }

    pub fn finish(self) -> BTreeMap<String, ShaderTypeDef> {
        self.types.into_types()
    }
}

/// the default value is exactly `size` bytes; a shorter payload is a failed read
fn default_value(name: &str, size: u32, bytes: Option<Vec<u8>>) -> Result<Option<Vec<u8>>> {
    let Some(mut bytes) = bytes else {
        return Ok(None);
    };

    let size = size as usize;
    if bytes.len() < size {
        return Err(ReflectError::read_failed(format!(
            "default value of {name} ({} of {size} bytes)",
            bytes.len()
        )));
    }
    bytes.truncate(size);

    Ok(Some(bytes))
}

pub fn bind_meta(desc: NativeInputBindDesc) -> ShaderBindMeta {
    let has_srv = desc.return_type != RETURN_TYPE_NONE
        || desc.num_samples != 0
        || desc.dimension != SRV_DIMENSION_UNKNOWN;
    let srv = has_srv.then(|| ShaderSrvBindMeta {
        storage: translate::srv_storage(desc.return_type),
        dimension: translate::srv_dimension(desc.dimension),
        num_samples: desc.num_samples,
    });

    ShaderBindMeta {
        name: desc.name,
        flags: translate::resource_flags(desc.input_type),
        point: desc.bind_point,
        count: desc.bind_count,
        space: desc.space,
        srv,
        exts: vec![ShaderBindMetaExt::Dx12(Dx12ShaderBindMetaExt {
            id: desc.uid,
            flags: desc.flags,
        })],
    }
}

pub fn param_meta(desc: NativeParameterDesc) -> ShaderParam {
    ShaderParam {
        sv: translate::semantic(desc.system_value_type),
        slot: desc.semantic_name.filter(|name| !name.is_empty()),
        index: desc.semantic_index,
        register: desc.register,
        mask: ShaderVectorMask::from_bits_truncate(desc.mask),
        rw_mask: ShaderVectorMask::from_bits_truncate(desc.read_write_mask),
        storage: translate::component_type(desc.component_type),
        stream: desc.stream,
        precision: translate::min_precision(desc.min_precision),
    }
}

pub fn build_input_param<R: ShaderReflection + ?Sized>(
    reflection: &R,
    index: u32,
) -> Result<ShaderParam> {
    reflection.input_parameter_desc(index).map(param_meta)
}

pub fn build_output_param<R: ShaderReflection + ?Sized>(
    reflection: &R,
    index: u32,
) -> Result<ShaderParam> {
    reflection.output_parameter_desc(index).map(param_meta)
}

pub fn build_patch_param<R: ShaderReflection + ?Sized>(
    reflection: &R,
    index: u32,
) -> Result<ShaderParam> {
    reflection.patch_constant_parameter_desc(index).map(param_meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::snapshot::*;

    #[test]
    fn zeroed_srv_fields_mean_no_srv() {
        let cbuffer = bind_meta(NativeInputBindDesc {
            name: "Globals".to_string(),
            input_type: SIT_CBUFFER,
            bind_count: 1,
            ..Default::default()
        });

        assert_eq!(cbuffer.flags, ShaderResourceFlags::CBUFFER);
        assert_eq!(cbuffer.srv, None);
    }

    #[test]
    fn texture_binding_has_srv_shape() {
        let texture = bind_meta(NativeInputBindDesc {
            name: "albedo".to_string(),
            input_type: SIT_TEXTURE,
            bind_point: 2,
            bind_count: 1,
            return_type: RETURN_TYPE_FLOAT,
            dimension: SRV_DIMENSION_TEXTURE2D,
            num_samples: u32::MAX,
            space: 1,
            uid: 5,
            ..Default::default()
        });

        assert_eq!(texture.point, 2);
        assert_eq!(texture.space, 1);
        assert_eq!(
            texture.srv,
            Some(ShaderSrvBindMeta {
                storage: ShaderSrvStorage::Float,
                dimension: ShaderSrvDimension::Texture2D,
                num_samples: u32::MAX,
            })
        );
        assert_eq!(
            texture.exts,
            vec![ShaderBindMetaExt::Dx12(Dx12ShaderBindMetaExt { id: 5, flags: 0 })]
        );
    }

    #[test]
    fn param_masks_and_empty_slot() {
        let param = param_meta(NativeParameterDesc {
            semantic_name: Some(String::new()),
            register: 3,
            system_value_type: NAME_POSITION,
            component_type: REGISTER_COMPONENT_FLOAT32,
            mask: 0b1111,
            read_write_mask: 0b0011,
            ..Default::default()
        });

        assert_eq!(param.sv, ShaderSemantic::Position);
        assert_eq!(param.slot, None);
        assert_eq!(param.mask, ShaderVectorMask::all());
        assert_eq!(param.rw_mask, ShaderVectorMask::X | ShaderVectorMask::Y);
        assert_eq!(param.storage, ShaderVectorComponentType::Float32);
    }

    fn snapshot_with_default(size: u32, default_value: Vec<u8>) -> ReflectionSnapshot {
        ReflectionSnapshot {
            constant_buffers: vec![SnapshotConstantBuffer {
                desc: NativeBufferDesc {
                    name: "Globals".to_string(),
                    size: 16,
                    ..Default::default()
                },
                variables: vec![SnapshotVariable {
                    desc: NativeVariableDesc {
                        name: "tint".to_string(),
                        size,
                        default_value: Some(default_value),
                        ..Default::default()
                    },
                    ty: 0,
                }],
            }],
            types: vec![SnapshotType {
                desc: NativeTypeDesc {
                    class: SVC_VECTOR,
                    ty: SVT_FLOAT,
                    rows: 1,
                    columns: 4,
                    name: Some("float4".to_string()),
                    ..Default::default()
                },
                members: vec![],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn default_value_is_cut_to_variable_size() {
        let snapshot = snapshot_with_default(4, vec![1, 2, 3, 4, 5, 6]);

        let var = BuildContext::new().build_variable(&snapshot, 0, 0).unwrap();

        assert_eq!(var.defv, Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn short_default_value_is_a_failed_read() {
        let snapshot = snapshot_with_default(16, vec![1, 2, 3]);

        let err = BuildContext::new().build_variable(&snapshot, 0, 0).unwrap_err();

        assert!(matches!(err, ReflectError::DescriptorReadFailed(_)));
    }
}
