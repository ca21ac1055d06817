//! Command line parsing into a set of options.

use alloc::vec::Vec;
use core::fmt;

use crate::Error;
use crate::parser::ParsedArgs;
use crate::store::Options;

/// Parses the command line and assigns the values it finds to a set of options.
///
/// The command line has the form:
///
/// ```text
/// <program> --option1[=value1] --option2[=value2] ...
/// ```
///
/// Each value is converted to the type of the option it targets. Boolean options accept a
/// bare `--option` as `true`.
#[derive(Debug)]
pub struct CommandLine<'a> {
    options: &'a mut Options,
}

impl<'a> CommandLine<'a> {
    /// Bind to a set of options.
    pub fn new(options: &'a mut Options) -> Self {
        CommandLine { options }
    }

    /// The bound set of options.
    #[inline(always)]
    pub fn options(&self) -> &Options {
        self.options
    }

    /// Parse the process arguments, `argv[0]` being the program name.
    ///
    /// Every value is converted before any is assigned, so the options are left untouched when
    /// parsing fails.
    pub fn parse<S>(&mut self, argv: &[S]) -> Result<(), Error>
    where
        S: AsRef<str>,
    {
        let args = ParsedArgs::parse(argv).inspect_err(|err| {
            debug!("invalid command line: {}", err);
        })?;

        let mut values = Vec::with_capacity(args.len());

        for (name, raw) in &args {
            let Some(kind) = self.options.kind_of(name) else {
                debug!("unknown option '{}'", name);
                return Err(Error::UnknownOption);
            };

            let Some(value) = kind.convert(raw) else {
                debug!("invalid value '{}' for option '{}' of type {}", raw, name, kind);
                return Err(Error::InvalidValue);
            };

            values.push((name, value));
        }

        for (name, value) in values {
            self.options.set_value(name, value)?;
        }

        Ok(())
    }

    /// Write the usage text of the bound options.
    #[inline(always)]
    pub fn usage<W>(&self, program: &str, out: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        self.options.print(program, out)
    }
}
