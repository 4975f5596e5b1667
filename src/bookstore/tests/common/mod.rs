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


use std::env;
use std::path::PathBuf;
use bookstore::{BookStore, Dataset, Result, DEFAULT_COLLECTION};

#[allow(dead_code)]
pub fn mk_db_path(db_name: &str) -> PathBuf {
    let mut db_path = env::temp_dir();
    let db_filename = String::from(db_name) + "-bookstore-db";
    db_path.push(db_filename);
    db_path
}

#[allow(dead_code)]
pub fn prepare_store(db_name: &str) -> Result<BookStore> {
    let db_path = mk_db_path(db_name);

    let _ = std::fs::remove_dir_all(db_path.as_path());
    let _ = std::fs::remove_file(db_path.as_path());

    let store = BookStore::open(db_path.as_path(), DEFAULT_COLLECTION)?;
    store.create_collection()?;
    Ok(store)
}

#[allow(dead_code)]
pub fn prepare_seeded_store(db_name: &str) -> Result<BookStore> {
    let store = prepare_store(db_name)?;
    store.seed(&Dataset::builtin()?)?;
    Ok(store)
}

#[allow(dead_code)]
pub fn titles<'a, I>(books: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a bookstore::Book>,
{
    let mut result: Vec<String> = books.into_iter().map(|book| book.title.clone()).collect();
    result.sort();
    result
}
