//! Variable store and `$name` substitution
//!
//! Substitution is plain text replacement, not tokenized: every literal
//! `$name` occurrence is replaced for every stored variable. Names are applied
//! longest first so `$AB` is never split by a shorter `$A`. A value that itself
//! contains `$name` may or may not be expanded again depending on where that
//! name falls in the order; scripts should not rely on either outcome.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Global variable mapping for one interpreter run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    vars: HashMap<String, String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, overwriting any previous one
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Replace `$name` with its value for every stored variable
    pub fn substitute(&self, input: &str) -> String {
        let mut names: Vec<&String> = self.vars.keys().collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut result = input.to_string();
        for name in names {
            let token = format!("${}", name);
            if result.contains(&token) {
                result = result.replace(&token, &self.vars[name]);
            }
        }
        result
    }

    /// Names of `$name` tokens in `input` that no stored variable matches
    pub fn unresolved(&self, input: &str) -> Vec<String> {
        static TOKEN: OnceLock<Regex> = OnceLock::new();
        let re = TOKEN.get_or_init(|| {
            Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").expect("valid token regex")
        });

        let mut names = Vec::new();
        for caps in re.captures_iter(input) {
            let name = caps[1].to_string();
            if !self.contains(&name) && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}
