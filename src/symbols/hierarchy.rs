//! Class hierarchy index used for call hierarchy analysis (CHA)
//!
//! Built once per generation pass and passed by reference into cost queries.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use super::{is_invalid_override, FunctionInfo, SymbolFlags, TypeRef};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct ClassEntry {
    pub name: String,
    /// Direct supertypes: superclass and implemented interfaces
    pub parents: Vec<String>,
    pub flags: SymbolFlags,
    pub functions: Vec<FunctionInfo>,
}

#[derive(Debug, Clone, Default)]
pub struct TypeHierarchy {
    by_type: HashMap<String, ClassEntry>,
    children: HashMap<String, Vec<String>>,
    /// Registration order, for deterministic iteration
    order: Vec<String>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class; every parent must already be registered
    pub fn add_class(&mut self, name: &str, parents: &[&str], flags: SymbolFlags) -> Result<TypeRef> {
        if self.by_type.contains_key(name) {
            return Err(Error::DuplicateClass(name.to_string()));
        }
        if let Some(missing) = parents.iter().find(|p| !self.by_type.contains_key(**p)) {
            return Err(Error::UnknownType(missing.to_string()));
        }
        for parent in parents {
            self.children
                .entry(parent.to_string())
                .or_default()
                .push(name.to_string());
        }
        self.by_type.insert(
            name.to_string(),
            ClassEntry {
                name: name.to_string(),
                parents: parents.iter().map(|p| p.to_string()).collect(),
                flags,
                functions: Vec::new(),
            },
        );
        self.order.push(name.to_string());
        trace!(class = name, ?parents, "registered class");
        Ok(TypeRef::class(name))
    }

    /// Register a member function without override checks
    pub fn add_function(&mut self, info: FunctionInfo) -> Result<()> {
        let owner = info
            .owner()
            .map(|o| o.name().to_string())
            .ok_or_else(|| Error::construction(format!("function '{}' has no owner", info.name())))?;
        let entry = self
            .by_type
            .get_mut(&owner)
            .ok_or_else(|| Error::UnknownType(owner.clone()))?;
        entry.functions.push(info);
        Ok(())
    }

    /// Register a synthesized member after checking it against every inherited one
    pub fn admit_function(&mut self, info: FunctionInfo) -> Result<()> {
        let owner = info.owner().map(|o| o.name().to_string()).unwrap_or_default();
        if is_invalid_override(&info, self.funcs_from_parents(&owner)) {
            debug!(owner = %owner, function = %info.signature(), "rejected invalid override");
            return Err(Error::InvalidOverride {
                name: info.name().to_string(),
                owner,
            });
        }
        debug!(owner = %owner, function = %info.signature(), "admitted function");
        self.add_function(info)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_type.contains_key(name)
    }

    pub fn class(&self, name: &str) -> Option<&ClassEntry> {
        self.by_type.get(name)
    }

    /// Registered classes in registration order
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.order.iter().filter_map(|name| self.by_type.get(name))
    }

    pub fn functions_of(&self, name: &str) -> &[FunctionInfo] {
        self.by_type
            .get(name)
            .map(|entry| entry.functions.as_slice())
            .unwrap_or(&[])
    }

    /// Every transitive supertype, nearest first
    pub fn all_parents(&self, name: &str) -> Vec<&str> {
        self.walk(name, |n| {
            self.by_type
                .get(n)
                .map(|e| e.parents.as_slice())
                .unwrap_or(&[])
        })
    }

    /// Every transitive subtype, nearest first
    pub fn all_children(&self, name: &str) -> Vec<&str> {
        self.walk(name, |n| self.children.get(n).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Member functions declared by any ancestor of `name`
    pub fn funcs_from_parents(&self, name: &str) -> Vec<&FunctionInfo> {
        self.all_parents(name)
            .into_iter()
            .flat_map(|parent| self.functions_of(parent))
            .collect()
    }

    /// Worst-case cost of invoking `info`, not counting its arguments.
    ///
    /// A constructor also runs the no-argument constructor of every ancestor. Any
    /// other call may dispatch to an override in a subtype, so the most expensive
    /// signature-equal definition among the subtypes wins.
    pub fn dispatch_cost(&self, info: &FunctionInfo) -> u64 {
        let owner = match info.owner() {
            Some(owner) => owner.name(),
            None => return info.complexity,
        };
        if info.is_constructor() {
            self.all_parents(owner)
                .into_iter()
                .flat_map(|parent| self.functions_of(parent))
                .filter(|f| f.is_constructor() && f.params().map_or(false, <[_]>::is_empty))
                .fold(info.complexity, |acc, f| acc.saturating_add(f.complexity))
        } else {
            self.all_children(owner)
                .into_iter()
                .flat_map(|child| self.functions_of(child))
                .filter(|f| f.has_equal_signature(info))
                .fold(info.complexity, |acc, f| acc.max(f.complexity))
        }
    }

    fn walk<'a, F>(&'a self, start: &str, next: F) -> Vec<&'a str>
    where
        F: Fn(&str) -> &'a [String],
    {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = next(start).iter().map(String::as_str).collect();
        let mut out = Vec::new();
        while let Some(current) = queue.pop_front() {
            if current == start || !seen.insert(current) {
                continue;
            }
            out.push(current);
            queue.extend(next(current).iter().map(String::as_str));
        }
        out
    }
}
