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


//! The bookstore walkthrough: create the collection, seed it, then run each
//! query and mutation once, in order.

use bson::Bson;
use log::info;
use serde::Serialize;
use crate::{Book, BookFilter, BookStore, BookSummary, Dataset, Page, Result, SortOrder};

pub const FICTION: &str = "Fiction";
pub const AUTHOR: &str = "Paulo Coelho";
pub const REPRICED_TITLE: &str = "The Alchemist";
pub const NEW_PRICE: f64 = 12.99;
pub const DELETED_TITLE: &str = "Animal Farm";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StepResult {
    Created,
    Inserted(Vec<Bson>),
    Books(Vec<Book>),
    Summaries(Vec<BookSummary>),
    Updated(bool),
    Deleted(bool),
}

#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub name: &'static str,
    pub result: StepResult,
}

impl StepOutcome {

    fn new(name: &'static str, result: StepResult) -> StepOutcome {
        info!("step {}: {}", name, result.summary());
        StepOutcome { name, result }
    }

}

impl StepResult {

    fn summary(&self) -> String {
        match self {
            StepResult::Created => "created".to_string(),
            StepResult::Inserted(ids) => format!("{} inserted", ids.len()),
            StepResult::Books(books) => format!("{} books", books.len()),
            StepResult::Summaries(summaries) => format!("{} summaries", summaries.len()),
            StepResult::Updated(updated) => format!("updated: {}", updated),
            StepResult::Deleted(deleted) => format!("deleted: {}", deleted),
        }
    }

    pub fn books(&self) -> Option<&[Book]> {
        match self {
            StepResult::Books(books) => Some(books),
            _ => None,
        }
    }

}

pub fn run_script(store: &BookStore, dataset: &Dataset) -> Result<Vec<StepOutcome>> {
    let mut steps = Vec::with_capacity(13);

    store.create_collection()?;
    steps.push(StepOutcome::new("create_collection", StepResult::Created));

    let id = store.insert_one(&dataset.first)?;
    steps.push(StepOutcome::new("insert_one", StepResult::Inserted(vec![id])));

    let ids = store.insert_many(&dataset.rest)?;
    steps.push(StepOutcome::new("insert_many", StepResult::Inserted(ids)));

    let books = store.find_by_genre(FICTION)?;
    steps.push(StepOutcome::new("find_by_genre", StepResult::Books(books)));

    let books = store.find_published_after(1900)?;
    steps.push(StepOutcome::new("find_published_after", StepResult::Books(books)));

    let books = store.find_by_author(AUTHOR)?;
    steps.push(StepOutcome::new("find_by_author", StepResult::Books(books)));

    let updated = store.update_price(REPRICED_TITLE, NEW_PRICE)?;
    steps.push(StepOutcome::new("update_price", StepResult::Updated(updated)));

    let deleted = store.delete_by_title(DELETED_TITLE)?;
    steps.push(StepOutcome::new("delete_by_title", StepResult::Deleted(deleted)));

    let books = store.find_in_stock_published_after(2010)?;
    steps.push(StepOutcome::new("find_in_stock_published_after", StepResult::Books(books)));

    let filter = BookFilter::PublishedAfter(1925).and(BookFilter::InStock(true));
    let summaries = store.find_summaries(&filter)?;
    steps.push(StepOutcome::new("find_summaries", StepResult::Summaries(summaries)));

    let books = store.sorted_by_price(SortOrder::Ascending)?;
    steps.push(StepOutcome::new("sort_price_ascending", StepResult::Books(books)));

    let books = store.sorted_by_price(SortOrder::Descending)?;
    steps.push(StepOutcome::new("sort_price_descending", StepResult::Books(books)));

    let books = store.page_by_price(Page::first())?;
    steps.push(StepOutcome::new("first_page_by_price", StepResult::Books(books)));

    Ok(steps)
}
