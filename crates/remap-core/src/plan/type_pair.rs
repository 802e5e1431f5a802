use std::fmt;

use crate::shape::TypeKey;

/// Key of a compiled plan: one (source, destination) type combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
    pub source: TypeKey,
    pub destination: TypeKey,
}

impl TypePair {
    pub fn new(source: TypeKey, destination: TypeKey) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn of<S: 'static, D: 'static>() -> Self {
        Self::new(TypeKey::of::<S>(), TypeKey::of::<D>())
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct Person;
    struct PersonDto;

    #[test]
    fn test_value_equality_as_map_key() {
        let mut plans = HashMap::new();
        plans.insert(TypePair::of::<Person, PersonDto>(), "forward");
        plans.insert(TypePair::of::<PersonDto, Person>(), "reverse");

        assert_eq!(plans.get(&TypePair::of::<Person, PersonDto>()), Some(&"forward"));
        assert_eq!(plans.get(&TypePair::of::<PersonDto, Person>()), Some(&"reverse"));
        assert_eq!(plans.get(&TypePair::of::<Person, Person>()), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TypePair::of::<Person, PersonDto>().to_string(), "Person -> PersonDto");
    }
}
