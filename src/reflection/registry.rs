use std::collections::{BTreeMap, HashMap};

use log::*;

use super::{ShaderReflection, translate};
use crate::error::Result;
use crate::meta::ShaderTypeDef;

/// Flattened, name-keyed type definitions for one document build.
///
/// A definition is inserted before its members are resolved, so a type graph
/// that refers back to an already registered name terminates. Types are keyed
/// by name only; two differently shaped types reported under the same name
/// collapse to whichever was seen first.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, ShaderTypeDef>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// returns the registered name of `ty`, registering it and its members on first sight
    pub fn resolve<R: ShaderReflection + ?Sized>(
        &mut self,
        reflection: &R,
        ty: R::TypeHandle,
    ) -> Result<String> {
        self.resolve_in(reflection, ty, &mut HashMap::new())
    }

    /// `in_progress` holds the handles on the current member path, so an
    /// anonymous type reached again through its own members reuses its name
    fn resolve_in<R: ShaderReflection + ?Sized>(
        &mut self,
        reflection: &R,
        ty: R::TypeHandle,
        in_progress: &mut HashMap<R::TypeHandle, String>,
    ) -> Result<String> {
        if let Some(name) = in_progress.get(&ty) {
            return Ok(name.clone());
        }

        let desc = reflection.type_desc(ty)?;

        let name = match desc.name.filter(|name| !name.is_empty()) {
            Some(name) if self.types.contains_key(&name) => return Ok(name),
            Some(name) => name,
            None => anonymous_type_name(),
        };

        let def = ShaderTypeDef {
            name: name.clone(),
            kind: translate::type_kind(desc.class),
            ty: translate::var_type(desc.ty),
            columns: desc.columns,
            rows: desc.rows,
            length: desc.elements,
            offset: desc.offset,
            members: None,
        };
        trace!("registering type {name}: {:?} {:?}", def.kind, def.ty);
        self.types.insert(name.clone(), def);

        if desc.members == 0 {
            return Ok(name);
        }

        in_progress.insert(ty, name.clone());
        let mut members = Vec::with_capacity(desc.members as usize);
        for index in 0..desc.members {
            let member = reflection.member_type(ty, index)?;
            members.push(self.resolve_in(reflection, member, in_progress)?);
        }
        in_progress.remove(&ty);

        if let Some(def) = self.types.get_mut(&name) {
            def.members = Some(members);
        }

        Ok(name)
    }

    pub fn get(&self, name: &str) -> Option<&ShaderTypeDef> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn into_types(self) -> BTreeMap<String, ShaderTypeDef> {
        self.types
    }
}

/// placeholder for types the backend reports without a name
fn anonymous_type_name() -> String {
    uuid::Uuid::new_v4().to_string()
}
