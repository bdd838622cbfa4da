// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geoviz WKT - Well-known-text geometry parser
//!
//! This crate parses the WKT subset used for debug visualization into the
//! geometry types defined in `geoviz-model`.
//!
//! # Features
//!
//! - **Fast parsing** using `nom` combinators and `lexical-core` numbers
//! - **Case-insensitive keywords** with optional `Z` dimension markers
//! - **EMPTY spellings** for every geometry kind
//! - **Nested collections** parsed recursively
//!
//! # Example
//!
//! ```
//! use geoviz_wkt::parse;
//!
//! let site = parse("POLYGON ((-6 5, -6 -1, -4 -6, 0 -5, 9 -1, 5 1, 1 6, -4 6, -6 5))")?;
//! assert_eq!(site.kind_name(), "polygon");
//! # Ok::<(), geoviz_wkt::WktError>(())
//! ```

mod error;
mod parser;

pub use error::{Result, WktError};
pub use parser::parse;
