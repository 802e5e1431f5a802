//! # Remap Demo
//!
//! Maps a book into its display DTO, the way an application would wire the
//! mapper: profiles discovered by name, one configuration, one mapper.

pub mod catalog;
pub mod config;

use anyhow::Result;
use remap_core::{Mapper, MapperConfiguration};
use tracing::info;

pub use catalog::{Book, BookDto, BOOK_PROFILE};
pub use config::DemoConfig;

/// Builds the configuration from the registered book profile.
pub fn build_configuration() -> Result<MapperConfiguration> {
    let configuration = MapperConfiguration::builder()
        .add_registered(BOOK_PROFILE)?
        .build()?;
    Ok(configuration)
}

/// Maps the book described by `config`.
pub fn run(config: &DemoConfig, mapper: &Mapper) -> Result<BookDto> {
    let book = config.book();
    info!(title = %book.title, chapters = book.chapters.len(), "mapping book");

    mapper
        .map_typed::<Book, BookDto>(Some(&book))?
        .ok_or_else(|| anyhow::anyhow!("mapping a present book produced nothing"))
}

/// Plain-text rendering of a mapped book.
pub fn render(dto: &BookDto) -> String {
    format!(
        "Title: {}\nAuthor: {}\nChapters: {}\nPrice: {}\nAvailable: {}",
        dto.title, dto.author, dto.chapter_count, dto.price_display, dto.available
    )
}
