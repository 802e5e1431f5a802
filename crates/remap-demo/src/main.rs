use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use remap_demo::{build_configuration, config::parse_chapters, render, run, DemoConfig};

fn main() -> Result<()> {
    let defaults = DemoConfig::default();

    // Parse command line arguments
    let matches = Command::new("remap-demo")
        .version(remap_core::VERSION)
        .about("Maps a book into its display DTO with the remap object mapper")
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TITLE")
                .help("Book title"),
        )
        .arg(
            Arg::new("author")
                .long("author")
                .value_name("AUTHOR")
                .help("Book author"),
        )
        .arg(
            Arg::new("price")
                .long("price")
                .value_name("PRICE")
                .help("Book price (default: 42.99)")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("stock")
                .long("stock")
                .value_name("COUNT")
                .help("Copies in stock (default: 15)")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("chapters")
                .long("chapters")
                .value_name("LIST")
                .help("Comma separated chapter titles"),
        )
        .arg(
            Arg::new("explain")
                .long("explain")
                .help("Print the compiled mapping plans as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the mapped DTO as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Extract command line options
    let config = DemoConfig {
        title: matches
            .get_one::<String>("title")
            .cloned()
            .unwrap_or(defaults.title),
        author: matches
            .get_one::<String>("author")
            .cloned()
            .unwrap_or(defaults.author),
        chapters: matches
            .get_one::<String>("chapters")
            .map(|list| parse_chapters(list))
            .unwrap_or(defaults.chapters),
        price: matches.get_one::<f64>("price").copied().unwrap_or(defaults.price),
        stock: matches.get_one::<i32>("stock").copied().unwrap_or(defaults.stock),
        explain: matches.get_flag("explain"),
        json: matches.get_flag("json"),
        debug: matches.get_flag("debug"),
    };

    // Initialize logging
    remap_core::init_tracing_with(config.tracing_directive());

    let configuration = build_configuration().context("building mapper configuration")?;

    if config.explain {
        println!("{}", serde_json::to_string_pretty(&configuration.describe())?);
    }

    let mapper = configuration.create_mapper();
    let dto = run(&config, &mapper)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&dto)?);
    } else {
        println!("{}", render(&dto));
    }

    Ok(())
}
