// Copyright (C) 2026 The rhood Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::stdin;
use std::io::stdout;
use std::io::BufRead as _;
use std::io::Write as _;

use rpassword::prompt_password;

use crate::Error;


/// A provider of the data required for logging in.
///
/// A provider is consulted by [`Client::login`][crate::Client::login]
/// for user name and password up front and for a one-time code if the
/// server asks for a second factor.
pub trait Credentials {
  /// Retrieve the user name to log in as.
  fn username(&mut self) -> Result<String, Error>;

  /// Retrieve the password of the user.
  fn password(&mut self) -> Result<String, Error>;

  /// Retrieve a one-time code for multi-factor authentication.
  fn mfa_code(&mut self) -> Result<String, Error>;
}


/// A [`Credentials`] provider interactively prompting on the terminal.
///
/// The password is read without being echoed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Prompt;

impl Prompt {
  /// Print a prompt and read a single line of input.
  fn read_line(prompt: &str) -> Result<String, Error> {
    let mut out = stdout().lock();
    out.write_all(prompt.as_bytes())?;
    out.flush()?;

    let mut line = String::new();
    let _count = stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
  }
}

impl Credentials for Prompt {
  fn username(&mut self) -> Result<String, Error> {
    Self::read_line("Username: ")
  }

  fn password(&mut self) -> Result<String, Error> {
    let password = prompt_password("Password: ")?;
    Ok(password)
  }

  fn mfa_code(&mut self) -> Result<String, Error> {
    Self::read_line("Enter code: ")
  }
}


/// A non-interactive [`Credentials`] provider handing out preset
/// values.
#[derive(Clone)]
pub struct Fixed {
  username: String,
  password: String,
  mfa_code: Option<String>,
}

impl Fixed {
  /// Create a provider for the given user name and password.
  pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      username: username.into(),
      password: password.into(),
      mfa_code: None,
    }
  }

  /// Provide a one-time code to answer a multi-factor challenge with.
  pub fn with_mfa_code(mut self, code: impl Into<String>) -> Self {
    self.mfa_code = Some(code.into());
    self
  }
}

impl Debug for Fixed {
  fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
    fmt
      .debug_struct("Fixed")
      .field("username", &self.username)
      .field("password", &"<masked>")
      .field("mfa_code", &self.mfa_code.as_ref().map(|_| "<masked>"))
      .finish()
  }
}

impl Credentials for Fixed {
  fn username(&mut self) -> Result<String, Error> {
    Ok(self.username.clone())
  }

  fn password(&mut self) -> Result<String, Error> {
    Ok(self.password.clone())
  }

  fn mfa_code(&mut self) -> Result<String, Error> {
    self
      .mfa_code
      .clone()
      .ok_or_else(|| Error::Str("a multi-factor code was requested but none is available".into()))
  }
}
