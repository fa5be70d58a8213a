//! docsmith - documentation built from document nodes
//!
//! A document node exposes a title, a description and a heading depth, and
//! hands itself to a rendering [`Engine`](engine::Engine) for markdown or
//! HTML output.
//!
//! ```no_run
//! use docsmith::doc::BaseDoc;
//! use docsmith::docs::DirectoryDoc;
//! use docsmith::engine::MarkdownEngine;
//!
//! let engine = MarkdownEngine::new();
//! let mut doc = BaseDoc::new(&engine, "docs", DirectoryDoc::new());
//! doc.set_depth(1);
//! println!("{}", doc.to_markdown()?);
//! # Ok::<(), docsmith::error::DocError>(())
//! ```

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod build;
pub mod config;
pub mod description;
pub mod doc;
pub mod docs;
pub mod engine;
pub mod error;
pub mod html_page;
pub mod markdown;

pub use doc::{BaseDoc, DocContent, DocContext, Document, TitleSource};
pub use engine::{Engine, MarkdownEngine};
pub use error::{DocError, Result};
