use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

mod bindings;
pub use bindings::*;

mod buffers;
pub use buffers::*;

mod exts;
pub use exts::*;

mod params;
pub use params::*;

mod types;
pub use types::*;

/// portable interface description of one compiled shader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderMeta {
    pub stage: ShaderStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub thread_group_size: Option<[u32; 3]>,
    #[serde(skip_serializing_if = "absent_map")]
    #[serde(default)]
    pub res: Option<BTreeMap<String, ShaderBindMeta>>,
    #[serde(skip_serializing_if = "absent_map")]
    #[serde(default)]
    pub cbs: Option<BTreeMap<String, ConstantBufferMeta>>,
    #[serde(skip_serializing_if = "absent_map")]
    #[serde(default)]
    pub types: Option<BTreeMap<String, ShaderTypeDef>>,
    #[serde(skip_serializing_if = "absent_vec")]
    #[serde(default)]
    pub inputs: Option<Vec<ShaderParam>>,
    #[serde(skip_serializing_if = "absent_vec")]
    #[serde(default)]
    pub outputs: Option<Vec<ShaderParam>>,
    #[serde(skip_serializing_if = "absent_vec")]
    #[serde(default)]
    pub patchs: Option<Vec<ShaderParam>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub exts: Vec<ShaderMetaExt>,
}

impl ShaderMeta {
    pub fn new(stage: ShaderStage) -> Self {
        Self {
            stage,
            thread_group_size: None,
            res: None,
            cbs: None,
            types: None,
            inputs: None,
            outputs: None,
            patchs: None,
            exts: vec![],
        }
    }

    /// collapses empty collections into `None`, the same state a parsed document ends up in
    pub fn normalized(mut self) -> Self {
        self.res = non_empty_map(self.res);
        self.cbs = non_empty_map(self.cbs).map(|cbs| {
            cbs.into_iter()
                .map(|(name, cb)| (name, cb.normalized()))
                .collect()
        });
        self.types = non_empty_map(self.types).map(|types| {
            types
                .into_iter()
                .map(|(name, ty)| (name, ty.normalized()))
                .collect()
        });
        self.inputs = non_empty_vec(self.inputs);
        self.outputs = non_empty_vec(self.outputs);
        self.patchs = non_empty_vec(self.patchs);
        self
    }

    pub fn type_def(&self, name: &str) -> Option<&ShaderTypeDef> {
        self.types.as_ref().and_then(|types| types.get(name))
    }

    /// every type name referenced by a variable or a struct member
    pub fn referenced_type_names(&self) -> Vec<&str> {
        let vars = self
            .cbs
            .iter()
            .flat_map(|cbs| cbs.values())
            .flat_map(|cb| cb.vars.iter().flat_map(|vars| vars.values()))
            .map(|var| var.ty.as_str());

        let members = self
            .types
            .iter()
            .flat_map(|types| types.values())
            .flat_map(|ty| ty.members.iter().flatten())
            .map(String::as_str);

        vars.chain(members).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderStage {
    Compute,
    Pixel,
    Vertex,
    Mesh,
    Task,
    Library,
    #[default]
    #[serde(other)]
    Other,
}

pub(crate) fn absent_map<K, V>(map: &Option<BTreeMap<K, V>>) -> bool {
    map.as_ref().is_none_or(BTreeMap::is_empty)
}

pub(crate) fn absent_vec<T>(vec: &Option<Vec<T>>) -> bool {
    vec.as_ref().is_none_or(Vec::is_empty)
}

pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

pub(crate) fn non_empty_map<K, V>(map: Option<BTreeMap<K, V>>) -> Option<BTreeMap<K, V>> {
    map.filter(|map| !map.is_empty())
}

pub(crate) fn non_empty_vec<T>(vec: Option<Vec<T>>) -> Option<Vec<T>> {
    vec.filter(|vec| !vec.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_collapses_empty_collections() {
        let mut meta = ShaderMeta::new(ShaderStage::Pixel);
        meta.res = Some(BTreeMap::new());
        meta.inputs = Some(vec![]);

        let mut cb = ConstantBufferMeta::new("Globals", 16);
        cb.vars = Some(BTreeMap::new());
        meta.cbs = Some(BTreeMap::from([("Globals".to_string(), cb)]));

        let meta = meta.normalized();

        assert!(meta.res.is_none());
        assert!(meta.inputs.is_none());
        let cbs = meta.cbs.unwrap();
        assert!(cbs["Globals"].vars.is_none());
    }

    #[test]
    fn unknown_stage_name_parses_as_other() {
        let stage: ShaderStage = serde_json::from_str(r#""Geometry""#).unwrap();
        assert_eq!(stage, ShaderStage::Other);
    }
}
