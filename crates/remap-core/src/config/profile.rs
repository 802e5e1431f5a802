use std::marker::PhantomData;

use indexmap::IndexMap;

use super::{rule::FieldRule, selector::resolve_selector};
use crate::{
    errors::ConfigError,
    plan::TypePair,
    shape::{FieldValue, Record, Shape, Structure},
};

/// No-argument constructor for a destination type.
pub type Constructor = fn() -> Box<dyn Record>;

fn construct_default<D: Structure + Default>() -> Box<dyn Record> {
    Box::new(D::default())
}

/// One `create_map` call: a type pair plus its custom field rules.
#[derive(Debug, Clone)]
pub struct MappingDeclaration {
    pub(crate) source: Shape,
    pub(crate) destination: Shape,
    pub(crate) construct: Constructor,
    pub(crate) rules: IndexMap<String, FieldRule>,
    /// Selectors `for_field` refused; compiling the declaration fails on them.
    pub(crate) rejected_selectors: Vec<String>,
}

impl MappingDeclaration {
    pub fn type_pair(&self) -> TypePair {
        TypePair::new(self.source.key(), self.destination.key())
    }

    /// Custom rules keyed by destination field, in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.values()
    }
}

/// A unit of configuration declaring one or more mappings.
///
/// Profiles are consumed once by `MapperConfiguration`.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    name: String,
    declarations: Vec<MappingDeclaration>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declares that `S` can be mapped into `D`.
    pub fn create_map<S, D>(&mut self) -> MappingExpression<'_, S, D>
    where
        S: Structure,
        D: Structure + Default,
    {
        self.declarations.push(MappingDeclaration {
            source: S::shape(),
            destination: D::shape(),
            construct: construct_default::<D>,
            rules: IndexMap::new(),
            rejected_selectors: Vec::new(),
        });
        let index = self.declarations.len() - 1;

        MappingExpression {
            declaration: &mut self.declarations[index],
            _types: PhantomData,
        }
    }

    pub fn declarations(&self) -> &[MappingDeclaration] {
        &self.declarations
    }

    pub(crate) fn into_declarations(self) -> Vec<MappingDeclaration> {
        self.declarations
    }
}

/// Builder returned by `Profile::create_map`.
pub struct MappingExpression<'p, S, D> {
    declaration: &'p mut MappingDeclaration,
    _types: PhantomData<fn(&S) -> D>,
}

impl<'p, S: Structure, D: Structure> MappingExpression<'p, S, D> {
    /// Attaches a custom rule to one destination field.
    ///
    /// A later call for the same field replaces the earlier rule. Whether the
    /// field exists is checked when the registry is built.
    ///
    /// An invalid selector fails here, and the pair stays declared: building
    /// a registry from this profile fails with the same error, so dropping
    /// the `Err` cannot produce a plan that silently lacks the rule.
    pub fn for_field<F>(self, selector: &str, configure: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&mut MemberConfiguration<S>),
    {
        let field = match resolve_selector(selector) {
            Ok(field) => field,
            Err(err) => {
                self.declaration.rejected_selectors.push(selector.to_string());
                return Err(err);
            }
        };

        let mut member = MemberConfiguration {
            field: field.to_string(),
            rule: None,
            _source: PhantomData,
        };
        configure(&mut member);

        let rule = member.rule.unwrap_or_else(|| FieldRule::null(field));
        self.declaration.rules.insert(field.to_string(), rule);
        Ok(self)
    }
}

/// Handle passed to the `for_field` closure.
pub struct MemberConfiguration<S> {
    field: String,
    rule: Option<FieldRule>,
    _source: PhantomData<fn(&S)>,
}

impl<S: Record> MemberConfiguration<S> {
    /// Computes the destination field from the source record at map time.
    pub fn map_from<R, F>(&mut self, resolver: F)
    where
        R: FieldValue,
        F: Fn(&S) -> R + Send + Sync + 'static,
    {
        self.rule = Some(FieldRule::new::<S, R, F>(self.field.clone(), resolver));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{shape::Value, TypeKey};
    use pretty_assertions::assert_eq;

    crate::record! {
        #[derive(Debug, Default)]
        struct Book {
            title: String,
            stock: i32,
        }
    }

    crate::record! {
        #[derive(Debug, Default)]
        struct BookDto {
            title: String,
            available: bool,
        }
    }

    #[test]
    fn test_create_map_appends_declarations() {
        let mut profile = Profile::new("books");
        profile.create_map::<Book, BookDto>();
        profile.create_map::<BookDto, Book>();

        let pairs: Vec<_> = profile.declarations().iter().map(|d| d.type_pair()).collect();
        assert_eq!(
            pairs,
            vec![
                TypePair::new(TypeKey::of::<Book>(), TypeKey::of::<BookDto>()),
                TypePair::new(TypeKey::of::<BookDto>(), TypeKey::of::<Book>()),
            ]
        );
        assert_eq!(profile.name(), "books");
    }

    #[test]
    fn test_last_for_field_wins() -> Result<(), ConfigError> {
        let mut profile = Profile::new("books");
        profile
            .create_map::<Book, BookDto>()
            .for_field("available", |m| m.map_from(|_: &Book| false))?
            .for_field("available", |m| m.map_from(|b: &Book| b.stock > 0))?;

        let declaration = &profile.declarations()[0];
        let rules: Vec<_> = declaration.rules().collect();
        assert_eq!(rules.len(), 1);

        let book = Book { title: "Dune".into(), stock: 2 };
        assert_eq!(rules[0].resolve(&book), Some(Value::Bool(true)));
        Ok(())
    }

    #[test]
    fn test_missing_map_from_resolves_null() -> Result<(), ConfigError> {
        let mut profile = Profile::new("books");
        profile.create_map::<Book, BookDto>().for_field("title", |_| {})?;

        let rule = profile.declarations()[0].rules().next().unwrap();
        assert_eq!(rule.resolve(&Book::default()), Some(Value::Null));
        Ok(())
    }

    #[test]
    fn test_invalid_selector_fails_immediately() {
        let mut profile = Profile::new("books");
        let result = profile
            .create_map::<Book, BookDto>()
            .for_field("title.len", |m| m.map_from(|b: &Book| b.title.len() as u64));

        assert!(matches!(result, Err(ConfigError::InvalidSelector { .. })));
        assert!(profile.declarations()[0].rules().next().is_none());
        assert_eq!(profile.declarations()[0].rejected_selectors, vec!["title.len".to_string()]);
    }

    #[test]
    fn test_unknown_fields_are_not_checked_here() {
        let mut profile = Profile::new("books");
        let result = profile
            .create_map::<Book, BookDto>()
            .for_field("nope", |m| m.map_from(|_: &Book| 1));
        assert!(result.is_ok());
    }
}
