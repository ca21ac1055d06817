//! A registry of typed options.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::Error;
use crate::parser::utils;
use crate::value::{Kind, OptionValue, Partitions, Value};

/// Defines an option holding a value of type `T`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedOption<T> {
    name: String,
    description: String,
    default: T,
    value: T,
}

impl<T: OptionValue> TypedOption<T> {
    fn new(name: String, description: &str, default: T) -> Self {
        TypedOption {
            name,
            description: String::from(description),
            value: default.clone(),
            default,
        }
    }

    /// The normalized option name.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The option description.
    #[inline(always)]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The value given at declaration.
    #[inline(always)]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// The current value.
    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn info(&self) -> OptionInfo<'_> {
        OptionInfo {
            name: &self.name,
            kind: T::KIND,
            description: &self.description,
            default: self.default.to_string(),
            value: self.value.to_string(),
        }
    }
}

/// Type-erased view of an option, with its values rendered as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionInfo<'a> {
    /// The normalized option name.
    pub name: &'a str,

    /// The option type.
    pub kind: Kind,

    /// The option description.
    pub description: &'a str,

    /// The default value.
    pub default: String,

    /// The current value.
    pub value: String,
}

/// Usage line of this option.
impl fmt::Display for OptionInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\t--{}=<{}> [{}]\n\t\t{}\n",
            self.name, self.kind, self.default, self.description
        )
    }
}

/// Defines the set of options a program accepts.
///
/// Options are keyed by their normalized name (trimmed and lower-cased), which is unique across
/// all value types. Storage is split into one homogeneous collection per supported type, and
/// typed accessors only look into the collection matching the requested type.
#[derive(Clone, Debug, Default)]
pub struct Options {
    partitions: Partitions,
}

impl Options {
    /// Create an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new option with its default value. The current value starts equal to the
    /// default.
    pub fn add<T>(&mut self, name: &str, default: T, description: &str) -> Result<(), Error>
    where
        T: OptionValue,
    {
        let name = utils::normalize(name);
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        if self.partitions.kind_of(&name).is_some() {
            debug!("option '{}' already exists", name.as_str());
            return Err(Error::Duplicate);
        }

        debug!("add option '{}' of type {}", name.as_str(), T::KIND);

        let option = TypedOption::new(name, description, default);
        T::partition_mut(&mut self.partitions).push(option);

        Ok(())
    }

    /// Check if there exists an option with the given name, whatever its type.
    #[inline(always)]
    pub fn exists(&self, name: &str) -> bool {
        self.kind_of(name).is_some()
    }

    /// Get the type of the option with the given name.
    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.partitions.kind_of(&utils::normalize(name))
    }

    /// Get the current value of an option.
    pub fn get<T>(&self, name: &str) -> Result<T, Error>
    where
        T: OptionValue,
    {
        self.option::<T>(name).map(|x| x.value().clone())
    }

    /// Get the default value of an option.
    pub fn default_value<T>(&self, name: &str) -> Result<T, Error>
    where
        T: OptionValue,
    {
        self.option::<T>(name).map(|x| x.default_value().clone())
    }

    /// Assign a new current value to an option. The default value is left unchanged.
    pub fn set<T>(&mut self, name: &str, value: T) -> Result<(), Error>
    where
        T: OptionValue,
    {
        let index = self.position::<T>(name)?;

        let option = T::partition_mut(&mut self.partitions)
            .get_mut(index)
            .ok_or(Error::DoesNotExist)?;

        option.value = value;

        Ok(())
    }

    /// Assign a tagged value to an option, dispatching on the value type.
    #[inline(always)]
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), Error> {
        value.set_into(self, name)
    }

    /// Remove an option, freeing its name.
    pub fn delete(&mut self, name: &str) -> Result<(), Error> {
        let name = utils::normalize(name);

        if name.is_empty() || !self.partitions.remove(&name) {
            return Err(Error::DoesNotExist);
        }

        debug!("delete option '{}'", name.as_str());

        Ok(())
    }

    /// Get an option of type `T`.
    pub fn option<T>(&self, name: &str) -> Result<&TypedOption<T>, Error>
    where
        T: OptionValue,
    {
        let index = self.position::<T>(name)?;

        T::partition(&self.partitions)
            .get(index)
            .ok_or(Error::DoesNotExist)
    }

    /// Describe every option, sorted by name.
    pub fn describe(&self) -> Vec<OptionInfo<'_>> {
        let mut out = self.partitions.describe();
        out.sort_by(|a, b| a.name.cmp(b.name));
        out
    }

    /// Write the usage text listing every option, sorted by name.
    pub fn print<W>(&self, program: &str, out: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        write!(out, "usage: {program} [options]\noptions:\n\n")?;

        for info in self.describe() {
            write!(out, "{info}")?;
        }

        Ok(())
    }

    /// Number of declared options.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// Check if no option is declared.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the index of an option in the partition of type `T`.
    fn position<T>(&self, name: &str) -> Result<usize, Error>
    where
        T: OptionValue,
    {
        let name = utils::normalize(name);
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        match T::partition(&self.partitions)
            .iter()
            .position(|x| x.name() == name)
        {
            Some(index) => Ok(index),
            // Declared, but under another type.
            None if self.partitions.kind_of(&name).is_some() => Err(Error::WrongType),
            None => Err(Error::DoesNotExist),
        }
    }
}
