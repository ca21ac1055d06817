//! longopt, a `no_std` registry of typed long options and a `--name=value` command line parser.
//!
//! Options are declared on an [`Options`] store with a name, a default value and a
//! description. A [`CommandLine`] then parses the process arguments and assigns the values it
//! finds, converting each one to the type of the option it targets.
//!
//! ```
//! use longopt::{CommandLine, Options};
//!
//! let mut options = Options::new();
//! options.add("verbose", false, "print more").unwrap();
//! options.add("jobs", 1u32, "number of workers").unwrap();
//!
//! CommandLine::new(&mut options)
//!     .parse(&["program", "--verbose", "--jobs=4"])
//!     .unwrap();
//!
//! assert_eq!(options.get::<bool>("verbose"), Ok(true));
//! assert_eq!(options.get::<u32>("jobs"), Ok(4));
//! ```
#![no_std]
#![deny(missing_docs)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod cmdline;
pub mod store;
pub mod value;

pub use longopt_parser as parser;

pub use cmdline::CommandLine;
pub use store::{OptionInfo, Options, TypedOption};
pub use value::{Kind, OptionValue, Value};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The option name is empty or pure whitespace.
    #[error("empty option name")]
    EmptyName,

    /// An option with this name already exists.
    #[error("duplicate option name")]
    Duplicate,

    /// No option exists with this name.
    #[error("option does not exist")]
    DoesNotExist,

    /// The option exists but holds a different type.
    #[error("option has a different type")]
    WrongType,

    /// The command line is ill-formed.
    #[error(transparent)]
    InvalidCommandLine(#[from] parser::Error),

    /// The command line names an option that was never declared.
    #[error("unknown option")]
    UnknownOption,

    /// The command line value cannot be converted to the option type.
    #[error("invalid option value")]
    InvalidValue,
}
