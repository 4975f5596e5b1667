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


use std::fs;
use std::path::Path;
use log::debug;
use crate::{Book, Error, Result};

const BUILTIN_BOOKS: &str = include_str!("data/books.json");

/// Records used to seed the collection.
///
/// `first` goes through insert-one and `rest` through insert-many.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub first: Book,
    pub rest: Vec<Book>,
}

impl Dataset {

    /// The twelve books bundled with the crate.
    pub fn builtin() -> Result<Dataset> {
        Dataset::from_json(BUILTIN_BOOKS)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let path = path.as_ref();
        debug!("loading dataset from {}", path.display());
        let content = fs::read_to_string(path)?;
        Dataset::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Dataset> {
        let books: Vec<Book> = serde_json::from_str(content)?;
        Dataset::from_books(books)
    }

    pub fn from_books(books: Vec<Book>) -> Result<Dataset> {
        for book in &books {
            book.validate()?;
        }
        let mut iter = books.into_iter();
        let first = iter.next().ok_or(Error::EmptyDataset)?;
        Ok(Dataset {
            first,
            rest: iter.collect(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin() {
        let dataset = Dataset::builtin().unwrap();
        assert_eq!(dataset.len(), 12);
        assert_eq!(dataset.rest.len(), 11);
        assert_eq!(dataset.first.title, "To Kill a Mockingbird");
        assert!(dataset.iter().all(|book| book.id.is_none()));

        let alchemist = dataset.iter().find(|book| book.title == "The Alchemist").unwrap();
        assert_eq!(alchemist.price, 10.99);
        assert_eq!(alchemist.author, "Paulo Coelho");
    }

    #[test]
    fn test_empty_dataset() {
        assert!(matches!(Dataset::from_json("[]"), Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_reject_invalid_record() {
        let content = r#"[{
            "title": "Broken",
            "author": "Nobody",
            "genre": "Fiction",
            "published_year": 2000,
            "price": -3.0,
            "in_stock": true,
            "pages": 10,
            "publisher": "Nowhere"
        }]"#;
        match Dataset::from_json(content) {
            Err(Error::InvalidBook { title, .. }) => assert_eq!(title, "Broken"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Dataset::from_json("{"), Err(Error::Json(_))));
    }

}
