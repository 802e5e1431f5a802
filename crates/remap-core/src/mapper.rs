//! Mapper - per-use handle over a shared, already compiled registry
//!
//! Lookup plus execution only: nothing a mapping call does touches shared
//! state, so any number of mappers may run concurrently.

use std::sync::Arc;

use tracing::trace;

use crate::{
    errors::MapError,
    plan::{TypeMap, TypePair},
    registry::TypeMaps,
    shape::{FieldType, Record, Structure, TypeKey, Value},
};

#[derive(Debug, Clone)]
pub struct Mapper {
    type_maps: TypeMaps,
}

impl Mapper {
    pub(crate) fn new(type_maps: TypeMaps) -> Self {
        Self { type_maps }
    }

    /// Maps a record into a new `D`, looking the plan up by the source's
    /// runtime type. A `None` source short-circuits before any lookup.
    pub fn map<D, R>(&self, source: Option<&R>) -> Result<Option<D>, MapError>
    where
        D: Structure,
        R: Record + ?Sized,
    {
        let Some(source) = source else {
            return Ok(None);
        };
        let source = source.as_record();
        let instance = self.map_record(source, source.type_key(), TypeKey::of::<D>())?;
        downcast(instance).map(Some)
    }

    /// Like [`Mapper::map`], but the plan is looked up by the static type `S`.
    pub fn map_typed<S, D>(&self, source: Option<&S>) -> Result<Option<D>, MapError>
    where
        S: Structure,
        D: Structure,
    {
        let Some(source) = source else {
            return Ok(None);
        };
        let instance = self.map_record(source, TypeKey::of::<S>(), TypeKey::of::<D>())?;
        downcast(instance).map(Some)
    }

    /// Maps into an existing destination and hands the same instance back.
    ///
    /// A `None` source leaves the destination untouched.
    pub fn map_into<'d, S, D>(
        &self,
        source: Option<&S>,
        destination: Option<&'d mut D>,
    ) -> Result<&'d mut D, MapError>
    where
        S: Structure,
        D: Structure,
    {
        let destination = destination.ok_or(MapError::NullDestination)?;
        let Some(source) = source else {
            return Ok(destination);
        };

        let type_map = self.lookup(TypeKey::of::<S>(), TypeKey::of::<D>())?;
        type_map.apply(source, &mut *destination)?;
        Ok(destination)
    }

    /// Maps a sequence element by element.
    ///
    /// Each element is looked up by its own runtime type and null positions
    /// are kept. The first failure aborts the whole call.
    pub fn map_seq<'a, D, R, I>(&self, source: I) -> Result<Vec<Option<D>>, MapError>
    where
        D: Structure,
        R: Record + ?Sized + 'a,
        I: IntoIterator<Item = Option<&'a R>>,
    {
        source
            .into_iter()
            .map(|element| self.map::<D, R>(element))
            .collect()
    }

    /// Dynamic entry point: maps a `Value` into the declared `destination` type.
    ///
    /// Lists map element-wise into `Vec<..>` targets, records through their
    /// pair's plan. Null stays null.
    pub fn map_value(&self, source: &Value, destination: &FieldType) -> Result<Value, MapError> {
        match (source, destination.without_optional()) {
            (Value::Null, _) => Ok(Value::Null),
            (Value::List(items), FieldType::List(element)) => items
                .iter()
                .map(|item| self.map_value(item, element))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            (Value::Record(record), FieldType::Record(key)) => {
                let instance = self.map_record(record.as_ref(), record.type_key(), *key)?;
                Ok(Value::Record(Arc::from(instance)))
            }
            (other, _) => Err(MapError::UnsupportedTarget {
                value_type: other.type_name(),
                destination: destination.to_string(),
            }),
        }
    }

    /// Whether a plan exists for `S -> D`.
    pub fn can_map<S: 'static, D: 'static>(&self) -> bool {
        self.type_maps.contains_key(&TypePair::of::<S, D>())
    }

    fn lookup(&self, source: TypeKey, destination: TypeKey) -> Result<&TypeMap, MapError> {
        let pair = TypePair::new(source, destination);
        trace!(%pair, "looking up type map");
        self.type_maps
            .get(&pair)
            .ok_or_else(|| MapError::mapping_not_found(source, destination))
    }

    fn map_record(
        &self,
        source: &dyn Record,
        source_type: TypeKey,
        destination: TypeKey,
    ) -> Result<Box<dyn Record>, MapError> {
        let type_map = self.lookup(source_type, destination)?;
        let mut instance = type_map.instantiate();
        type_map.apply(source, &mut *instance)?;
        Ok(instance)
    }
}

fn downcast<D: Structure>(instance: Box<dyn Record>) -> Result<D, MapError> {
    instance
        .into_any()
        .downcast::<D>()
        .map(|boxed| *boxed)
        .map_err(|_| MapError::Construction {
            destination: TypeKey::of::<D>(),
        })
}
