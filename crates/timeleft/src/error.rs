// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error types for settings and their persistence.

/// A settings value was outside its valid range.
///
/// # Examples
///
/// ```
/// use timeleft::ClockTime;
///
/// let error = ClockTime::new(24, 0).unwrap_err();
/// assert!(error.to_string().contains("hour"));
/// ```
#[ohno::error]
pub struct SettingsError;

/// A key-value store could not read or write a value.
///
/// Wraps the underlying I/O or JSON error, which is available through
/// [`std::error::Error::source()`].
#[ohno::error]
#[from(std::io::Error, serde_json::Error)]
pub struct StoreError;
