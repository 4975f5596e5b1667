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


use std::path::Path;
use bson::{doc, Bson, Document};
use log::{debug, info, warn};
use polodb_core::{Collection, CollectionT, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::{Book, BookFilter, BookSummary, Dataset, Error, Page, Result, SortOrder};

pub const DEFAULT_COLLECTION: &str = "books";

/// Identifiers produced by [`BookStore::seed`].
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub inserted_one: Bson,
    pub inserted_many: Vec<Bson>,
    pub count: u64,
}

/// A books collection inside a PoloDB database.
///
/// Every operation is independent and blocks until the database answers.
pub struct BookStore {
    db: Database,
    collection: String,
}

impl BookStore {

    pub fn open<P: AsRef<Path>>(path: P, collection: &str) -> Result<BookStore> {
        let path = path.as_ref();
        let db = Database::open_path(path)?;
        info!("opened database {}, collection: {}", path.display(), collection);
        Ok(BookStore::with_database(db, collection))
    }

    pub fn with_database(db: Database, collection: &str) -> BookStore {
        BookStore {
            db,
            collection: collection.to_string(),
        }
    }

    #[inline]
    pub fn collection_name(&self) -> &str {
        &self.collection
    }

    fn books(&self) -> Collection<Book> {
        self.typed()
    }

    fn typed<T>(&self) -> Collection<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        self.db.collection::<T>(&self.collection)
    }

    /// Creates the collection unless it exists already.
    pub fn create_collection(&self) -> Result<()> {
        let names = self.db.list_collection_names()?;
        if names.iter().any(|name| name == &self.collection) {
            debug!("collection {} already exists", self.collection);
            return Ok(());
        }
        self.db.create_collection(&self.collection)?;
        info!("created collection {}", self.collection);
        Ok(())
    }

    pub fn insert_one(&self, book: &Book) -> Result<Bson> {
        let result = self.books().insert_one(book)?;
        debug!("inserted {}: {}", book.title, result.inserted_id);
        Ok(result.inserted_id)
    }

    /// Returns the generated identifiers in input order.
    pub fn insert_many(&self, books: &[Book]) -> Result<Vec<Bson>> {
        if books.is_empty() {
            return Ok(vec![]);
        }
        let result = self.books().insert_many(books)?;
        let mut ids = Vec::with_capacity(books.len());
        for index in 0..books.len() {
            let id = result.inserted_ids.get(&index).cloned().unwrap_or(Bson::Null);
            ids.push(id);
        }
        debug!("inserted {} books", ids.len());
        Ok(ids)
    }

    pub fn seed(&self, dataset: &Dataset) -> Result<SeedReport> {
        let inserted_one = self.insert_one(&dataset.first)?;
        let inserted_many = self.insert_many(&dataset.rest)?;
        let count = self.count()?;
        info!("seeded {} books, collection size: {}", dataset.len(), count);
        Ok(SeedReport {
            inserted_one,
            inserted_many,
            count,
        })
    }

    pub fn count(&self) -> Result<u64> {
        let count = self.books().count_documents()?;
        Ok(count)
    }

    pub fn find(&self, filter: &BookFilter) -> Result<Vec<Book>> {
        self.find_as::<Book>(filter)
    }

    /// Runs `filter` and keeps only `_id`, `title`, `author` and `price`.
    pub fn find_summaries(&self, filter: &BookFilter) -> Result<Vec<BookSummary>> {
        self.find_as::<BookSummary>(filter)
    }

    fn find_as<T>(&self, filter: &BookFilter) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned + Send + Sync + Unpin,
    {
        let filter_doc = filter.to_document();
        debug!("find in {}: {}", self.collection, filter_doc);
        let cursor = self.typed::<T>().find(filter_doc).run()?;
        collect(cursor)
    }

    pub fn find_by_genre(&self, genre: &str) -> Result<Vec<Book>> {
        self.find(&BookFilter::genre(genre))
    }

    pub fn find_by_author(&self, author: &str) -> Result<Vec<Book>> {
        self.find(&BookFilter::author(author))
    }

    pub fn find_published_after(&self, year: i32) -> Result<Vec<Book>> {
        self.find(&BookFilter::PublishedAfter(year))
    }

    pub fn find_in_stock_published_after(&self, year: i32) -> Result<Vec<Book>> {
        let filter = BookFilter::PublishedAfter(year).and(BookFilter::InStock(true));
        self.find(&filter)
    }

    pub fn find_by_title(&self, title: &str) -> Result<Option<Book>> {
        let book = self.books().find_one(BookFilter::title(title).to_document())?;
        Ok(book)
    }

    pub fn sorted_by_price(&self, order: SortOrder) -> Result<Vec<Book>> {
        let cursor = self.books()
            .find(Document::new())
            .sort(order.by_price())
            .run()?;
        collect(cursor)
    }

    /// Sorts by ascending price, then skips to `page`.
    pub fn page_by_price(&self, page: Page) -> Result<Vec<Book>> {
        debug!("page {}: skip {}, limit {}", page.number(), page.skip(), page.limit());
        let cursor = self.books()
            .find(Document::new())
            .sort(SortOrder::Ascending.by_price())
            .skip(page.skip())
            .limit(page.limit())
            .run()?;
        collect(cursor)
    }

    /// Sets the price of the first book titled `title`.
    ///
    /// Returns `false` without inserting anything when no book matches.
    pub fn update_price(&self, title: &str, price: f64) -> Result<bool> {
        if !price.is_finite() || price < 0.0 {
            return Err(Error::InvalidBook {
                title: title.to_string(),
                reason: "price must be a non-negative number",
            });
        }
        if self.find_by_title(title)?.is_none() {
            warn!("update price: no book titled {:?}", title);
            return Ok(false);
        }
        let result = self.books().update_one(
            BookFilter::title(title).to_document(),
            doc! {
                "$set": {
                    "price": price,
                },
            },
        )?;
        info!("updated price of {:?} to {}, modified: {}", title, price, result.modified_count);
        Ok(true)
    }

    /// Removes at most one book titled `title`.
    pub fn delete_by_title(&self, title: &str) -> Result<bool> {
        let result = self.books().delete_one(BookFilter::title(title).to_document())?;
        if result.deleted_count == 0 {
            warn!("delete: no book titled {:?}", title);
            return Ok(false);
        }
        info!("deleted {:?}", title);
        Ok(true)
    }

}

fn collect<T, I>(cursor: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = polodb_core::Result<T>>,
{
    let mut result = Vec::new();
    for item in cursor {
        result.push(item?);
    }
    Ok(result)
}
