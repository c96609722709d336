// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation options.
//!
//! | Option | Default | Effect |
//! |--------|---------|--------|
//! | `channel_capacity` | `10` | Bound of the row and error channels of non-key lookups |
//! | `output_suffix` | `"_query.rs"` | Appended to the lower-cased type name for output files |
//! | `format` | `true` | Run the formatter over the emitted text |

/// Options controlling one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Capacity of each bounded channel returned by non-key lookups.
    pub channel_capacity: usize,

    /// Suffix of the default output file name.
    pub output_suffix: String,

    /// Whether to pass the emitted text through the formatter.
    pub format: bool
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            channel_capacity: 10,
            output_suffix:    "_query.rs".to_string(),
            format:           true
        }
    }
}

impl GenerateOptions {
    /// Default output file name for a record type.
    ///
    /// # Example
    ///
    /// ```
    /// use sqlgen::GenerateOptions;
    ///
    /// assert_eq!(GenerateOptions::default().file_name("UserAccount"), "useraccount_query.rs");
    /// ```
    #[must_use]
    pub fn file_name(&self, type_name: &str) -> String {
        format!("{}{}", type_name.to_lowercase(), self.output_suffix)
    }
}
