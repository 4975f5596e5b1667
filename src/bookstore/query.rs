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


use std::collections::HashSet;
use bson::{doc, Document};
use crate::{Error, Result};

pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// Predicates over the fields of a book.
///
/// String comparisons are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq)]
pub enum BookFilter {
    All,
    Genre(String),
    Author(String),
    Title(String),
    /// `published_year` strictly greater than the given year.
    PublishedAfter(i32),
    InStock(bool),
    And(Vec<BookFilter>),
}

impl BookFilter {

    pub fn genre(genre: impl Into<String>) -> BookFilter {
        BookFilter::Genre(genre.into())
    }

    pub fn author(author: impl Into<String>) -> BookFilter {
        BookFilter::Author(author.into())
    }

    pub fn title(title: impl Into<String>) -> BookFilter {
        BookFilter::Title(title.into())
    }

    pub fn and(self, other: BookFilter) -> BookFilter {
        match self {
            BookFilter::All => other,
            BookFilter::And(mut filters) => {
                filters.push(other);
                BookFilter::And(filters)
            }
            this => BookFilter::And(vec![this, other]),
        }
    }

    pub fn to_document(&self) -> Document {
        match self {
            BookFilter::All => Document::new(),
            BookFilter::Genre(genre) => doc! { "genre": genre.as_str() },
            BookFilter::Author(author) => doc! { "author": author.as_str() },
            BookFilter::Title(title) => doc! { "title": title.as_str() },
            BookFilter::PublishedAfter(year) => {
                let year = *year;
                doc! {
                    "published_year": {
                        "$gt": year,
                    },
                }
            }
            BookFilter::InStock(in_stock) => {
                let in_stock = *in_stock;
                doc! { "in_stock": in_stock }
            }
            BookFilter::And(filters) => BookFilter::and_document(filters),
        }
    }

    // Sub-predicates on distinct keys share one document. A repeated key
    // would overwrite the earlier predicate, so those fall back to `$and`.
    fn and_document(filters: &[BookFilter]) -> Document {
        let parts: Vec<Document> = filters
            .iter()
            .map(BookFilter::to_document)
            .filter(|doc| !doc.is_empty())
            .collect();

        let mut seen = HashSet::new();
        let has_repeated_key = parts
            .iter()
            .flat_map(|part| part.keys())
            .any(|key| !seen.insert(key.as_str()));
        if has_repeated_key {
            return doc! { "$and": parts };
        }

        let mut merged = Document::new();
        for (key, value) in parts.into_iter().flatten() {
            merged.insert(key, value);
        }
        merged
    }

}

impl Default for BookFilter {
    fn default() -> Self {
        BookFilter::All
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {

    pub fn by_price(self) -> Document {
        let direction = match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        };
        doc! { "price": direction }
    }

}

/// A 1-based page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u64,
    size: u64,
}

impl Page {

    pub fn new(number: u64, size: u64) -> Result<Page> {
        if number == 0 || size == 0 {
            return Err(Error::InvalidPage { number, size });
        }
        Ok(Page { number, size })
    }

    pub fn first() -> Page {
        Page {
            number: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    #[inline]
    pub fn number(&self) -> u64 {
        self.number
    }

    #[inline]
    pub fn skip(&self) -> u64 {
        (self.number - 1) * self.size
    }

    #[inline]
    pub fn limit(&self) -> u64 {
        self.size
    }

    pub fn next(&self) -> Page {
        Page {
            number: self.number + 1,
            size: self.size,
        }
    }

}
