// Copyright 2024 Vincent Chan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Command line entry point for the bookstore.
//!
//! `cargo run -- run` seeds a fresh `plp_bookstore.db` and prints the result
//! of every step as one JSON document per line. The other subcommands run a
//! single operation against an existing database, for example
//! `cargo run -- find --genre Fiction --summary`.
//!
//! Set `RUST_LOG=bookstore=debug` to see the filter documents sent to PoloDB.

use anyhow::{Context, Result};
use bookstore::script::run_script;
use bookstore::{BookFilter, BookStore, Dataset, Page, SortOrder, DEFAULT_COLLECTION};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as App};
use log::debug;
use serde::Serialize;

const DEFAULT_PATH: &str = "plp_bookstore.db";

fn main() -> Result<()> {
    env_logger::init();
    let matches = build_app().get_matches();
    if matches.subcommand_name().is_none() {
        build_app().print_help()?;
        return Ok(());
    }

    let path = matches.get_one::<String>("path").context("missing --path")?;
    let collection = matches.get_one::<String>("collection").context("missing --collection")?;
    let store = BookStore::open(path, collection)
        .with_context(|| format!("failed to open database at {}", path))?;

    match matches.subcommand() {
        Some(("run", sub)) => {
            let dataset = load_dataset(sub)?;
            for step in run_script(&store, &dataset)? {
                print_json(&step)?;
            }
        }
        Some(("seed", sub)) => {
            let dataset = load_dataset(sub)?;
            store.create_collection()?;
            print_json(&store.seed(&dataset)?)?;
        }
        Some(("count", _)) => {
            println!("{}", store.count()?);
        }
        Some(("find", sub)) => {
            let filter = filter_from_matches(sub);
            debug!("find filter: {:?}", filter);
            if sub.get_flag("summary") {
                print_all(&store.find_summaries(&filter)?)?;
            } else {
                print_all(&store.find(&filter)?)?;
            }
        }
        Some(("sort", sub)) => {
            let order = if sub.get_flag("desc") {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            print_all(&store.sorted_by_price(order)?)?;
        }
        Some(("page", sub)) => {
            let number = *sub.get_one::<u64>("number").context("missing page number")?;
            let size = *sub.get_one::<u64>("size").context("missing page size")?;
            let page = Page::new(number, size)?;
            print_all(&store.page_by_price(page)?)?;
        }
        Some(("update-price", sub)) => {
            let title = sub.get_one::<String>("title").context("missing title")?;
            let price = *sub.get_one::<f64>("price").context("missing price")?;
            let updated = store.update_price(title, price)?;
            print_json(&serde_json::json!({ "title": title, "updated": updated }))?;
        }
        Some(("delete", sub)) => {
            let title = sub.get_one::<String>("title").context("missing title")?;
            let deleted = store.delete_by_title(title)?;
            print_json(&serde_json::json!({ "title": title, "deleted": deleted }))?;
        }
        _ => unreachable!("subcommand checked above"),
    }

    Ok(())
}

fn build_app() -> App {
    App::new("bookstore")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Seed and query a books collection on PoloDB")
        .author("Vincent Chan <okcdz@diverse.space>")
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .value_name("PATH")
                .help("the database path")
                .default_value(DEFAULT_PATH)
                .num_args(1)
        )
        .arg(
            Arg::new("collection")
                .long("collection")
                .help("the collection name")
                .default_value(DEFAULT_COLLECTION)
                .num_args(1)
        )
        .subcommand(App::new("run")
            .about("create the collection, seed it and run every query")
            .arg(data_arg())
        )
        .subcommand(App::new("seed")
            .about("create the collection and insert the books")
            .arg(data_arg())
        )
        .subcommand(App::new("count")
            .about("print the number of books")
        )
        .subcommand(App::new("find")
            .about("find books, all filters must match")
            .arg(Arg::new("genre").long("genre").num_args(1))
            .arg(Arg::new("author").long("author").num_args(1))
            .arg(Arg::new("title").long("title").num_args(1))
            .arg(
                Arg::new("after")
                    .long("after")
                    .help("published strictly after this year")
                    .value_parser(value_parser!(i32))
                    .num_args(1)
            )
            .arg(
                Arg::new("in-stock")
                    .long("in-stock")
                    .help("only books in stock")
                    .action(ArgAction::SetTrue)
            )
            .arg(
                Arg::new("summary")
                    .long("summary")
                    .help("only print title, author and price")
                    .action(ArgAction::SetTrue)
            )
        )
        .subcommand(App::new("sort")
            .about("list books sorted by price")
            .arg(Arg::new("desc").long("desc").action(ArgAction::SetTrue))
        )
        .subcommand(App::new("page")
            .about("list one page of books sorted by ascending price")
            .arg(
                Arg::new("number")
                    .help("page number, starting at 1")
                    .value_parser(value_parser!(u64))
                    .required(true)
            )
            .arg(
                Arg::new("size")
                    .long("size")
                    .value_parser(value_parser!(u64))
                    .default_value("5")
                    .num_args(1)
            )
        )
        .subcommand(App::new("update-price")
            .about("set the price of the book with the given title")
            .arg(Arg::new("title").required(true))
            .arg(
                Arg::new("price")
                    .value_parser(value_parser!(f64))
                    .required(true)
            )
        )
        .subcommand(App::new("delete")
            .about("delete one book with the given title")
            .arg(Arg::new("title").required(true))
        )
}

fn data_arg() -> Arg {
    Arg::new("data")
        .long("data")
        .value_name("FILE")
        .help("a JSON array of books, defaults to the bundled dataset")
        .num_args(1)
}

fn load_dataset(matches: &ArgMatches) -> Result<Dataset> {
    let dataset = match matches.get_one::<String>("data") {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("failed to load dataset from {}", path))?,
        None => Dataset::builtin()?,
    };
    Ok(dataset)
}

fn filter_from_matches(matches: &ArgMatches) -> BookFilter {
    let mut filter = BookFilter::All;
    if let Some(genre) = matches.get_one::<String>("genre") {
        filter = filter.and(BookFilter::genre(genre.as_str()));
    }
    if let Some(author) = matches.get_one::<String>("author") {
        filter = filter.and(BookFilter::author(author.as_str()));
    }
    if let Some(title) = matches.get_one::<String>("title") {
        filter = filter.and(BookFilter::title(title.as_str()));
    }
    if let Some(year) = matches.get_one::<i32>("after") {
        filter = filter.and(BookFilter::PublishedAfter(*year));
    }
    if matches.get_flag("in-stock") {
        filter = filter.and(BookFilter::InStock(true));
    }
    filter
}

fn print_all<T: Serialize>(items: &[T]) -> Result<()> {
    for item in items {
        print_json(item)?;
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
