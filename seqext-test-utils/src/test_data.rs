// Copyright 2026 seqext contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Document fixtures shared across integration tests.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Document {
    pub title: String,
    pub pages: u32,
}

impl Document {
    #[must_use]
    pub const fn new(title: String, pages: u32) -> Self {
        Self { title, pages }
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}p)", self.title, self.pages)
    }
}

pub fn document_intro() -> Document {
    Document::new("Introduction".to_string(), 12)
}

pub fn document_guide() -> Document {
    Document::new("User Guide".to_string(), 48)
}

pub fn document_appendix() -> Document {
    Document::new("Appendix".to_string(), 7)
}
