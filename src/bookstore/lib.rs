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


//! A books collection on top of PoloDB.
//!
//! [`BookStore`] wraps a PoloDB [`Database`](polodb_core::Database) and exposes
//! the handful of operations the bookstore needs: seeding, equality and range
//! filters, projection, sorting by price, pagination, and single-document
//! update and delete by title.
//!
//! ```no_run
//! use bookstore::{BookStore, Dataset, DEFAULT_COLLECTION};
//!
//! let store = BookStore::open("plp_bookstore.db", DEFAULT_COLLECTION)?;
//! store.create_collection()?;
//! store.seed(&Dataset::builtin()?)?;
//! for book in store.find_by_genre("Fiction")? {
//!     println!("{}", book.title);
//! }
//! # Ok::<(), bookstore::Error>(())
//! ```

mod book;
mod dataset;
mod errors;
mod query;
mod store;
pub mod script;

pub use book::{Book, BookSummary};
pub use dataset::Dataset;
pub use errors::{Error, Result};
pub use query::{BookFilter, Page, SortOrder, DEFAULT_PAGE_SIZE};
pub use store::{BookStore, SeedReport, DEFAULT_COLLECTION};
