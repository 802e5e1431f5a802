//! Shared models and profiles for the integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use remap_core::{record, ConfigError, Mapper, MapperConfiguration, Profile, Value};

record! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Person {
        pub name: String,
        pub age: i32,
        pub email: String,
    }
}

record! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct PersonDto {
        pub name: String,
        pub age: i32,
        pub email: String,
    }
}

record! {
    /// Destination with fewer fields than `Person`.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct PartialPersonDto {
        pub name: String,
    }
}

record! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Address {
        pub street: String,
        pub city: String,
    }
}

record! {
    #[derive(Debug, Clone, Default)]
    pub struct PersonWithAddress {
        pub name: String,
        pub address: Option<Arc<Address>>,
    }
}

record! {
    #[derive(Debug, Clone, Default)]
    pub struct PersonWithAddressDto {
        pub name: String,
        pub address: Option<Arc<Address>>,
    }
}

record! {
    /// Flattened view of `PersonWithAddress`.
    #[derive(Debug, Clone, Default)]
    pub struct PersonSummaryDto {
        pub name: String,
        pub city: String,
    }
}

record! {
    #[derive(Debug, Clone, Default)]
    pub struct Employee {
        pub first_name: String,
        pub last_name: String,
        pub salary: f64,
        pub department: String,
    }
}

record! {
    #[derive(Debug, Clone, Default)]
    pub struct EmployeeDto {
        pub full_name: String,
        pub salary: f64,
        pub department: String,
    }
}

record! {
    #[derive(Debug, Clone, Default)]
    pub struct Product {
        pub name: String,
        pub price: f64,
        pub stock: i32,
    }
}

record! {
    #[derive(Debug, Clone, Default)]
    pub struct ProductDto {
        pub name: String,
        pub price: f64,
        pub stock: i32,
        pub available: bool,
        pub price_label: String,
    }
}

record! {
    /// Same field name as `Person::name` but in a different case.
    #[allow(non_snake_case)]
    #[derive(Debug, Clone, Default)]
    pub struct ShoutingDto {
        pub Name: String,
        pub age: i32,
    }
}

record! {
    /// Destination with an open, accept-anything field.
    #[derive(Debug, Clone, Default)]
    pub struct LooseDto {
        pub name: Value,
        pub age: Option<i32>,
    }
}

pub fn person(name: &str, age: i32) -> Person {
    Person {
        name: name.to_string(),
        age,
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

pub fn people_profile() -> Profile {
    let mut profile = Profile::new("people");
    profile.create_map::<Person, PersonDto>();
    profile.create_map::<PersonDto, Person>();
    profile.create_map::<Person, PartialPersonDto>();
    profile.create_map::<Person, ShoutingDto>();
    profile.create_map::<Person, LooseDto>();
    profile.create_map::<PersonWithAddress, PersonWithAddressDto>();
    profile
}

pub fn employee_profile() -> Result<Profile, ConfigError> {
    let mut profile = Profile::new("employees");
    profile
        .create_map::<Employee, EmployeeDto>()
        .for_field("full_name", |m| {
            m.map_from(|e: &Employee| format!("{} {}", e.first_name, e.last_name))
        })?;
    Ok(profile)
}

pub fn product_profile() -> Result<Profile, ConfigError> {
    let mut profile = Profile::new("products");
    profile
        .create_map::<Product, ProductDto>()
        .for_field("available", |m| m.map_from(|p: &Product| p.stock > 0))?
        .for_field("price_label", |m| {
            m.map_from(|p: &Product| format!("${:.2}", p.price))
        })?;
    Ok(profile)
}

pub fn mapper() -> anyhow::Result<Mapper> {
    let configuration =
        MapperConfiguration::new([people_profile(), employee_profile()?, product_profile()?])?;
    Ok(configuration.create_mapper())
}
