//! Book catalogue models and the profile that maps them.

use remap_core::{record, register_profile, ConfigError, Profile};
use serde::Serialize;

record! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Book {
        pub title: String,
        pub author: String,
        pub chapters: Vec<String>,
        pub price: f64,
        pub stock: i32,
    }
}

record! {
    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    pub struct BookDto {
        pub title: String,
        pub author: String,
        pub chapter_count: i32,
        pub price_display: String,
        pub available: bool,
    }
}

/// Name the book profile is registered under.
pub const BOOK_PROFILE: &str = "books";

/// `title` and `author` are matched by name; everything else is computed.
pub fn configure_books(profile: &mut Profile) -> Result<(), ConfigError> {
    profile
        .create_map::<Book, BookDto>()
        .for_field("chapter_count", |m| {
            m.map_from(|b: &Book| b.chapters.len() as u64)
        })?
        .for_field("price_display", |m| {
            m.map_from(|b: &Book| format!("${:.2}", b.price))
        })?
        .for_field("available", |m| m.map_from(|b: &Book| b.stock > 0))?;
    Ok(())
}

register_profile!(BOOK_PROFILE, configure_books);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use remap_core::MapperConfiguration;

    fn clean_code(stock: i32) -> Book {
        Book {
            title: "Clean Code".into(),
            author: "Robert C. Martin".into(),
            chapters: vec![
                "Clean Code".into(),
                "Meaningful Names".into(),
                "Functions".into(),
                "Comments".into(),
                "Formatting".into(),
            ],
            price: 42.99,
            stock,
        }
    }

    #[test]
    fn test_book_maps_to_dto() {
        let mapper = MapperConfiguration::builder()
            .add_registered(BOOK_PROFILE)
            .unwrap()
            .build()
            .unwrap()
            .create_mapper();

        let dto: BookDto = mapper.map(Some(&clean_code(15))).unwrap().unwrap();
        assert_eq!(
            dto,
            BookDto {
                title: "Clean Code".into(),
                author: "Robert C. Martin".into(),
                chapter_count: 5,
                price_display: "$42.99".into(),
                available: true,
            }
        );
    }

    #[test]
    fn test_out_of_stock_book_is_unavailable() {
        let mut profile = Profile::new(BOOK_PROFILE);
        configure_books(&mut profile).unwrap();
        let mapper = MapperConfiguration::new([profile]).unwrap().create_mapper();

        let dto: BookDto = mapper.map(Some(&clean_code(0))).unwrap().unwrap();
        assert!(!dto.available);
    }
}
