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


use bookstore::BookFilter;

mod common;

use common::{prepare_seeded_store, prepare_store, titles};

#[test]
fn test_delete_by_title() {
    let store = prepare_seeded_store("test-delete-by-title").unwrap();

    assert!(store.delete_by_title("Animal Farm").unwrap());
    assert_eq!(store.count().unwrap(), 11);

    assert!(store.find_by_title("Animal Farm").unwrap().is_none());
    assert_eq!(titles(&store.find_by_author("George Orwell").unwrap()), vec!["1984"]);
    assert!(store.find_by_genre("Political Satire").unwrap().is_empty());
}

#[test]
fn test_delete_missing_title_is_noop() {
    let store = prepare_seeded_store("test-delete-missing").unwrap();

    assert!(!store.delete_by_title("The Silmarillion").unwrap());
    assert_eq!(store.count().unwrap(), 12);

    assert!(store.delete_by_title("Animal Farm").unwrap());
    assert!(!store.delete_by_title("Animal Farm").unwrap());
    assert_eq!(store.count().unwrap(), 11);
}

#[test]
fn test_delete_removes_one_of_duplicates() {
    let store = prepare_store("test-delete-duplicates").unwrap();
    let dataset = bookstore::Dataset::builtin().unwrap();

    store.insert_one(&dataset.first).unwrap();
    store.insert_one(&dataset.first).unwrap();
    assert_eq!(store.count().unwrap(), 2);

    assert!(store.delete_by_title(&dataset.first.title).unwrap());
    assert_eq!(store.count().unwrap(), 1);

    let remaining = store.find(&BookFilter::title(dataset.first.title.as_str())).unwrap();
    assert_eq!(remaining.len(), 1);
}
