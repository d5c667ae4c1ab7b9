// Copyright 2026 seqext contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module with the crate's extension traits.

pub use crate::as_list::AsListExt;
pub use crate::await_each::AwaitEachExt;
