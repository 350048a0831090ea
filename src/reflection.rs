use std::collections::BTreeMap;

use log::*;

use crate::error::Result;
use crate::meta::*;

pub mod native;
use native::*;

pub mod translate;

mod registry;
pub use registry::*;

mod builders;
pub use builders::*;

/// Turns compiled shader bytes into a reflection handle.
///
/// The handle is released when it is dropped, on both the success and the
/// failure path of a build.
pub trait ReflectionProvider {
    type Reflection: ShaderReflection;

    fn create_reflection(&self, bytes: &[u8]) -> Result<Self::Reflection>;
}

/// Read access to one shader's native reflection data.
///
/// Every fallible accessor failing is fatal for the build that called it.
pub trait ShaderReflection {
    /// opaque reference to a native type description
    type TypeHandle: Copy + Eq + std::hash::Hash;

    fn desc(&self) -> Result<NativeShaderDesc>;

    /// all zeros for stages without a thread group
    fn thread_group_size(&self) -> [u32; 3];

    fn min_feature_level(&self) -> Result<u32>;

    fn requires_flags(&self) -> u64;

    fn is_sample_frequency_shader(&self) -> bool;

    fn resource_binding_desc(&self, index: u32) -> Result<NativeInputBindDesc>;

    fn constant_buffer_desc(&self, index: u32) -> Result<NativeBufferDesc>;

    fn variable_desc(&self, buffer: u32, index: u32) -> Result<NativeVariableDesc>;

    fn variable_type(&self, buffer: u32, index: u32) -> Result<Self::TypeHandle>;

    fn type_desc(&self, ty: Self::TypeHandle) -> Result<NativeTypeDesc>;

    fn member_type(&self, ty: Self::TypeHandle, index: u32) -> Result<Self::TypeHandle>;

    fn input_parameter_desc(&self, index: u32) -> Result<NativeParameterDesc>;

    fn output_parameter_desc(&self, index: u32) -> Result<NativeParameterDesc>;

    fn patch_constant_parameter_desc(&self, index: u32) -> Result<NativeParameterDesc>;
}

/// Walks the whole reflection once and composes the metadata document.
///
/// Any failed descriptor read aborts the build; no partial document is returned.
pub fn reflect_shader<R: ShaderReflection + ?Sized>(reflection: &R) -> Result<ShaderMeta> {
    let desc = reflection.desc()?;
    let version = translate::version_to_string(desc.version);
    debug!(
        "reflecting {version}: {} resources, {} constant buffers, {}/{}/{} in/out/patch params",
        desc.bound_resources,
        desc.constant_buffers,
        desc.input_parameters,
        desc.output_parameters,
        desc.patch_constant_parameters,
    );

    let mut cx = BuildContext::new();

    let mut res = BTreeMap::new();
    for index in 0..desc.bound_resources {
        let binding = cx.build_binding(reflection, index)?;
        insert_first(&mut res, "resource binding", binding.name.clone(), binding);
    }

    let mut cbs = BTreeMap::new();
    for index in 0..desc.constant_buffers {
        let cb = cx.build_constant_buffer(reflection, index)?;
        insert_first(&mut cbs, "constant buffer", cb.name.clone(), cb);
    }

    let inputs = (0..desc.input_parameters)
        .map(|index| build_input_param(reflection, index))
        .collect::<Result<Vec<_>>>()?;
    let outputs = (0..desc.output_parameters)
        .map(|index| build_output_param(reflection, index))
        .collect::<Result<Vec<_>>>()?;
    let patchs = (0..desc.patch_constant_parameters)
        .map(|index| build_patch_param(reflection, index))
        .collect::<Result<Vec<_>>>()?;

    let [x, y, z] = reflection.thread_group_size();
    let thread_group_size = (x != 0 || y != 0 || z != 0).then_some([x, y, z]);

    let min_feature_level = reflection.min_feature_level()?;
    let ext = ShaderMetaExt::Dx12(Dx12ShaderMetaExt {
        version,
        creator: desc.creator.filter(|creator| !creator.is_empty()),
        flags: desc.flags,
        min_feature_level: Some(translate::feature_level(min_feature_level)),
        requires_flags: reflection.requires_flags(),
        is_sample_frequency_shader: reflection.is_sample_frequency_shader(),
    });

    let types = cx.finish();
    debug!("registered {} distinct types", types.len());

    let meta = ShaderMeta {
        stage: translate::version_to_stage(desc.version),
        thread_group_size,
        res: Some(res),
        cbs: Some(cbs),
        types: Some(types),
        inputs: Some(inputs),
        outputs: Some(outputs),
        patchs: Some(patchs),
        exts: vec![ext],
    };

    Ok(meta.normalized())
}

/// Keeps the first entity registered under `name`; later duplicates are dropped.
fn insert_first<T>(map: &mut BTreeMap<String, T>, kind: &str, name: String, value: T) {
    use std::collections::btree_map::Entry;

    match map.entry(name) {
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
        Entry::Occupied(entry) => {
            warn!("duplicate {kind} name {:?}, keeping the first", entry.key());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ReflectError;
    use crate::snapshot::*;

    fn scalar(name: &str, ty: u32) -> SnapshotType {
        SnapshotType {
            desc: NativeTypeDesc {
                class: SVC_SCALAR,
                ty,
                rows: 1,
                columns: 1,
                name: Some(name.to_string()),
                ..Default::default()
            },
            members: vec![],
        }
    }

    fn variable(name: &str, start_offset: u32, size: u32, ty: usize) -> SnapshotVariable {
        SnapshotVariable {
            desc: NativeVariableDesc {
                name: name.to_string(),
                start_offset,
                size,
                ..Default::default()
            },
            ty,
        }
    }

    fn globals(variables: Vec<SnapshotVariable>) -> SnapshotConstantBuffer {
        SnapshotConstantBuffer {
            desc: NativeBufferDesc {
                name: "Globals".to_string(),
                kind: CT_CBUFFER,
                size: 16,
                ..Default::default()
            },
            variables,
        }
    }

    fn binding(name: &str, input_type: u32, bind_point: u32) -> NativeInputBindDesc {
        NativeInputBindDesc {
            name: name.to_string(),
            input_type,
            bind_point,
            bind_count: 1,
            ..Default::default()
        }
    }

    fn compute_snapshot() -> ReflectionSnapshot {
        ReflectionSnapshot {
            version: (SHVER_COMPUTE_SHADER << 16) | (6 << 4) | 5,
            thread_group_size: [8, 8, 1],
            min_feature_level: FEATURE_LEVEL_12_0,
            bindings: vec![
                binding("Globals", SIT_CBUFFER, 0),
                binding("output", SIT_UAV_RWTYPED, 0),
            ],
            constant_buffers: vec![globals(vec![
                variable("scale", 0, 4, 0),
                variable("count", 4, 4, 1),
            ])],
            types: vec![scalar("float", SVT_FLOAT), scalar("uint", SVT_UINT)],
            ..Default::default()
        }
    }

    #[test]
    fn composes_compute_document() {
        let meta = reflect_shader(&compute_snapshot()).unwrap();

        assert_eq!(meta.stage, ShaderStage::Compute);
        assert_eq!(meta.thread_group_size, Some([8, 8, 1]));

        let res = meta.res.as_ref().unwrap();
        assert_eq!(res.keys().collect::<Vec<_>>(), ["Globals", "output"]);
        assert_eq!(res["output"].flags, ShaderResourceFlags::RW_BUFFER);

        let vars = meta.cbs.as_ref().unwrap()["Globals"].vars.clone().unwrap();
        assert_eq!(vars["scale"].ty, "float");
        assert_eq!(vars["count"].ty, "uint");
        assert_eq!(meta.types.as_ref().unwrap().len(), 2);

        assert!(meta.inputs.is_none());
        assert!(meta.outputs.is_none());
        assert!(meta.patchs.is_none());

        let Some(ShaderMetaExt::Dx12(ext)) = meta.exts.first() else {
            panic!("missing dx12 extension");
        };
        assert_eq!(ext.version, "cs_6_5");
        assert_eq!(ext.min_feature_level.as_deref(), Some("12_0"));
        assert_eq!(ext.creator, None);
    }

    #[test]
    fn zero_thread_group_is_absent() {
        let snapshot = ReflectionSnapshot {
            version: SHVER_PIXEL_SHADER << 16 | 6 << 4,
            ..Default::default()
        };

        let meta = reflect_shader(&snapshot).unwrap();

        assert_eq!(meta.stage, ShaderStage::Pixel);
        assert_eq!(meta.thread_group_size, None);
        assert!(meta.res.is_none());
        assert!(meta.cbs.is_none());
        assert!(meta.types.is_none());
    }

    #[test]
    fn duplicate_names_keep_the_first_entry() {
        let mut snapshot = compute_snapshot();
        snapshot.bindings.push(binding("output", SIT_UAV_RWBYTEADDRESS, 4));

        let meta = reflect_shader(&snapshot).unwrap();

        let output = &meta.res.as_ref().unwrap()["output"];
        assert_eq!(output.flags, ShaderResourceFlags::RW_BUFFER);
        assert_eq!(output.point, 0);
    }

    #[test]
    fn patch_constants_are_kept_apart_from_outputs() {
        let param = |name: &str| NativeParameterDesc {
            semantic_name: Some(name.to_string()),
            component_type: REGISTER_COMPONENT_FLOAT32,
            mask: 1,
            ..Default::default()
        };
        let snapshot = ReflectionSnapshot {
            version: SHVER_HULL_SHADER << 16 | 5 << 4 | 1,
            outputs: vec![param("POSITION")],
            patch_constants: vec![param("SV_TessFactor"), param("SV_InsideTessFactor")],
            ..Default::default()
        };

        let meta = reflect_shader(&snapshot).unwrap();

        assert_eq!(meta.outputs.as_ref().map(Vec::len), Some(1));
        let patchs = meta.patchs.unwrap();
        assert_eq!(patchs.len(), 2);
        assert_eq!(patchs[0].slot.as_deref(), Some("SV_TessFactor"));
    }

    #[test]
    fn unknown_native_codes_still_build() {
        let mut snapshot = compute_snapshot();
        snapshot.version = 0x7fff_0060;
        snapshot.min_feature_level = 0x1234;
        snapshot.bindings.push(binding("mystery", 999, 2));
        snapshot.types[0].desc.class = 77;
        snapshot.types[0].desc.ty = 500;

        let meta = reflect_shader(&snapshot).unwrap();

        assert_eq!(meta.stage, ShaderStage::Other);
        assert!(meta.res.as_ref().unwrap()["mystery"].flags.is_empty());

        let float = meta.type_def("float").unwrap();
        assert_eq!(float.kind, ShaderTypeKind::Unknown);
        assert_eq!(float.ty, ShaderVarType::Unknown);

        let Some(ShaderMetaExt::Dx12(ext)) = meta.exts.first() else {
            panic!("missing dx12 extension");
        };
        assert_eq!(ext.min_feature_level.as_deref(), Some("0x1234"));
    }

    #[test]
    fn failed_type_read_aborts_the_build() {
        let mut snapshot = compute_snapshot();
        snapshot.constant_buffers[0].variables[1].ty = 42;

        let err = reflect_shader(&snapshot).unwrap_err();
        assert!(matches!(err, ReflectError::DescriptorReadFailed(_)));
    }
}
