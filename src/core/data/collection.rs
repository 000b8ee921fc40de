use serde::Serialize;

/// A single `--name: value;` declaration.
///
/// `name` is stored without the `--` prefix and `raw_value` without the
/// trailing `;`, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDef {
    pub name: String,
    pub raw_value: String,
}

impl VariableDef {
    pub fn new(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// A named value-set within a collection (e.g. "Light", "Dark").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mode {
    pub name: String,
    pub variables: Vec<VariableDef>,
}

impl Mode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
        }
    }
}

/// A token collection as declared by a `Collection name:` annotation.
///
/// Modes keep their declaration order. The first mode becomes the default
/// mode of the matching store collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub name: String,
    pub modes: Vec<Mode>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modes: Vec::new(),
        }
    }

    /// Registers an empty mode, or clears the variable list of an existing
    /// mode with the same name. Either way the mode keeps its position.
    ///
    /// Returns the index of the mode.
    pub fn reset_mode(&mut self, name: &str) -> usize {
        match self.mode_index(name) {
            Some(index) => {
                self.modes[index].variables.clear();
                index
            }
            None => {
                self.modes.push(Mode::new(name));
                self.modes.len() - 1
            }
        }
    }

    pub fn mode_index(&self, name: &str) -> Option<usize> {
        self.modes.iter().position(|mode| mode.name == name)
    }

    /// Name of the first declared mode, if any.
    pub fn default_mode_name(&self) -> Option<&str> {
        self.modes.first().map(|mode| mode.name.as_str())
    }

    pub fn variable_count(&self) -> usize {
        self.modes.iter().map(|mode| mode.variables.len()).sum()
    }

    /// Folds another block of the same collection into this one.
    ///
    /// Modes not yet present are appended in order; variables of modes that
    /// already exist are appended to the existing list.
    pub fn absorb(&mut self, other: Collection) {
        for mode in other.modes {
            match self.mode_index(&mode.name) {
                Some(index) => self.modes[index].variables.extend(mode.variables),
                None => self.modes.push(mode),
            }
        }
    }
}
