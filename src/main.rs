//! trail: inspect storefront breadcrumb trails from the command line

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_trail::commands::config::handle_check_config_command;
use storefront_trail::commands::trail::{
    handle_location_command, handle_page_command, handle_resolve_command,
};
use storefront_trail::commands::{OutputFormat, TrailOptions};
use storefront_trail::core::load_or_default;
use storefront_trail::trail::PageKind;

const DEFAULT_LOG_FILTER: &str = "storefront_trail=warn";
const VERBOSE_LOG_FILTER: &str = "storefront_trail=debug";

fn build_cli() -> Command {
    Command::new("trail")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Breadcrumb trails for the pro-audio storefront")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Catalog file with route and label overrides"),
        )
        .arg(
            Arg::new("max-items")
                .long("max-items")
                .global(true)
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Maximum number of visible trail items"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .global(true)
                .value_parser(["text", "json", "json-ld"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log lookup fallbacks and truncation decisions to stderr"),
        )
        .subcommand(
            Command::new("location")
                .about("Trail for a location such as /products/line-array")
                .arg(Arg::new("path").required(true).value_name("PATH")),
        )
        .subcommand(
            Command::new("product")
                .about("Trail for a product detail page")
                .arg(Arg::new("name").required(true).value_name("NAME"))
                .arg(Arg::new("id").long("id").required(true).value_name("ID"))
                .arg(Arg::new("category").long("category").value_name("SLUG")),
        )
        .subcommand(
            Command::new("application")
                .about("Trail for an application page")
                .arg(Arg::new("name").required(true).value_name("NAME"))
                .arg(Arg::new("slug").long("slug").required(true).value_name("SLUG")),
        )
        .subcommand(
            Command::new("category")
                .about("Trail for a category listing")
                .arg(Arg::new("name").required(true).value_name("NAME"))
                .arg(Arg::new("slug").long("slug").required(true).value_name("SLUG"))
                .arg(Arg::new("parent").long("parent").value_name("SLUG")),
        )
        .subcommand(
            Command::new("page")
                .about("Trail for a generic page")
                .arg(Arg::new("name").required(true).value_name("NAME"))
                .arg(Arg::new("id").long("id").required(true).value_name("ID")),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve a route name to its path")
                .arg(Arg::new("route").required(true).value_name("ROUTE_NAME")),
        )
        .subcommand(
            Command::new("check-config")
                .about("Load and validate a catalog file")
                .arg(
                    Arg::new("file")
                        .value_name("PATH")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };

    // stderr only: stdout carries trail output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn string_arg(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn page_kind(name: &str, matches: &ArgMatches) -> Option<PageKind> {
    let label = string_arg(matches, "name");
    let page = match name {
        "product" => PageKind::Product {
            name: label,
            id: string_arg(matches, "id"),
            category: string_arg(matches, "category"),
        },
        "application" => PageKind::Application {
            name: label,
            slug: string_arg(matches, "slug"),
        },
        "category" => PageKind::Category {
            name: label,
            slug: string_arg(matches, "slug"),
            parent: matches.get_one::<String>("parent").cloned(),
        },
        "page" => PageKind::Page {
            name: label,
            id: string_arg(matches, "id"),
        },
        _ => return None,
    };
    Some(page)
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let format: OutputFormat = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text")
        .parse()?;
    let options = TrailOptions {
        format,
        max_items: matches.get_one::<usize>("max-items").copied(),
    };
    let config_path = matches.get_one::<PathBuf>("config");

    match matches.subcommand() {
        Some(("check-config", sub)) => {
            let file = sub.get_one::<PathBuf>("file").or(config_path);
            handle_check_config_command(file.map(PathBuf::as_path))
        }
        Some(("location", sub)) => {
            let settings = load_or_default(config_path.map(PathBuf::as_path))?;
            handle_location_command(&string_arg(sub, "path"), &settings, &options)
        }
        Some(("resolve", sub)) => {
            let settings = load_or_default(config_path.map(PathBuf::as_path))?;
            handle_resolve_command(&string_arg(sub, "route"), &settings, options.format)
        }
        Some((name, sub)) => match page_kind(name, sub) {
            Some(page) => {
                let settings = load_or_default(config_path.map(PathBuf::as_path))?;
                handle_page_command(&page, &settings, &options)
            }
            None => Err(anyhow::anyhow!("Unknown command: {}", name)),
        },
        None => Err(anyhow::anyhow!("No command given")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_category_parses_parent() {
        let matches = build_cli()
            .try_get_matches_from([
                "trail", "category", "Flown Subs", "--slug", "flown-subs", "--parent", "subwoofers",
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(
            page_kind(name, sub),
            Some(PageKind::Category {
                name: "Flown Subs".to_string(),
                slug: "flown-subs".to_string(),
                parent: Some("subwoofers".to_string()),
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["trail", "location", "/products", "--max-items", "3", "--format", "json"])
            .unwrap();
        assert_eq!(matches.get_one::<usize>("max-items"), Some(&3));
        assert_eq!(matches.get_one::<String>("format").map(String::as_str), Some("json"));
    }
}
