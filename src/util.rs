// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use serde::de::value::Error as ValueError;
use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer as _;
use serde::Deserialize;
use serde::Serialize;
use serde_variant::to_variant_name;

use url::form_urlencoded::byte_serialize;

use crate::Error;
use crate::Str;


/// Create a query string assigning a comma separated list of values
/// to the given key.
///
/// Each value is URL encoded on its own while the separating commas are
/// kept verbatim, so that `["AAPL", "TSLA"]` becomes
/// `symbols=AAPL,TSLA`.
pub(crate) fn comma_separated_query<S>(key: &str, values: &[S]) -> Str
where
  S: AsRef<str>,
{
  let values = values
    .iter()
    .map(|value| byte_serialize(value.as_ref().as_bytes()).collect::<String>())
    .collect::<Vec<_>>()
    .join(",");

  format!("{key}={values}").into()
}


/// Format a unit enum variant using its serialized name.
pub(crate) fn fmt_variant<T>(variant: &T, fmt: &mut Formatter<'_>) -> FmtResult
where
  T: Serialize,
{
  // Variant names of unit enum variants are always retrievable.
  let name = to_variant_name(variant).map_err(|_| std::fmt::Error)?;
  fmt.write_str(name)
}


/// Parse a unit enum variant from its serialized name, rejecting
/// anything not known.
pub(crate) fn parse_variant<'de, T>(what: &str, s: &'de str) -> Result<T, Error>
where
  T: Deserialize<'de>,
{
  let deserializer: StrDeserializer<'de, ValueError> = s.into_deserializer();
  T::deserialize(deserializer).map_err(|_| Error::Str(format!("invalid {what}: {s}").into()))
}
