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


use bson::Bson;
use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// A record of the `books` collection.
///
/// `id` is `None` until the datastore assigns an `_id` on insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Bson>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub price: f64,
    pub in_stock: bool,
    pub pages: i32,
    pub publisher: String,
}

impl Book {

    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(self.invalid("title is empty"));
        }
        if !self.price.is_finite() {
            return Err(self.invalid("price is not a finite number"));
        }
        if self.price < 0.0 {
            return Err(self.invalid("price is negative"));
        }
        if self.pages <= 0 {
            return Err(self.invalid("pages must be positive"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &'static str) -> Error {
        Error::InvalidBook {
            title: self.title.clone(),
            reason,
        }
    }

}

/// Projection of a [`Book`] onto `_id`, `title`, `author` and `price`.
///
/// Documents fetched through a collection of this type drop every other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    #[serde(rename = "_id")]
    pub id: Bson,
    pub title: String,
    pub author: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book {
            id: None,
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            genre: "Fantasy".to_string(),
            published_year: 1937,
            price: 14.99,
            in_stock: true,
            pages: 310,
            publisher: "George Allen & Unwin".to_string(),
        }
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut book = sample();
        book.price = -1.0;
        assert!(matches!(book.validate(), Err(Error::InvalidBook { reason: "price is negative", .. })));

        let mut book = sample();
        book.price = f64::NAN;
        assert!(book.validate().is_err());

        let mut book = sample();
        book.pages = 0;
        assert!(matches!(book.validate(), Err(Error::InvalidBook { reason: "pages must be positive", .. })));

        let mut book = sample();
        book.title.clear();
        assert!(book.validate().is_err());
    }

    #[test]
    fn test_serialize_without_id() {
        let doc = bson::to_document(&sample()).unwrap();
        assert!(doc.get("_id").is_none());
        assert_eq!(doc.get_str("genre").unwrap(), "Fantasy");
        assert_eq!(doc.get_i32("published_year").unwrap(), 1937);
        assert_eq!(doc.get_f64("price").unwrap(), 14.99);
        assert_eq!(doc.get_bool("in_stock").unwrap(), true);
    }

    #[test]
    fn test_summary_drops_other_fields() {
        let mut doc = bson::to_document(&sample()).unwrap();
        doc.insert("_id", 42);
        let summary: BookSummary = bson::from_document(doc).unwrap();
        assert_eq!(summary, BookSummary {
            id: Bson::Int32(42),
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            price: 14.99,
        });
        let back = bson::to_document(&summary).unwrap();
        assert_eq!(back.keys().collect::<Vec<_>>(), vec!["_id", "title", "author", "price"]);
        assert_eq!(back.get("genre"), None);
    }

}
