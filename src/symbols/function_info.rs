use super::{Access, Symbol, SymbolFlags, TypeRef, VariableInfo};

/// A method or constructor of a generated class
///
/// `args` lists every argument slot. Instance members (anything not `STATIC`,
/// constructors included) carry their receiver in slot 0; [`FunctionInfo::params`]
/// gives the declared parameters without it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionInfo {
    pub symbol: Symbol,
    pub args: Vec<VariableInfo>,
    /// Declared cost of executing the body once
    pub complexity: u64,
}

impl FunctionInfo {
    pub fn new(
        name: impl Into<String>,
        owner: TypeRef,
        return_type: TypeRef,
        complexity: u64,
        flags: SymbolFlags,
        args: Vec<VariableInfo>,
    ) -> Self {
        Self {
            symbol: Symbol::new(name, Some(owner), return_type, flags),
            args,
            complexity,
        }
    }

    /// An instance method; the receiver slot is prepended to `params`
    pub fn method(
        name: impl Into<String>,
        owner: TypeRef,
        return_type: TypeRef,
        complexity: u64,
        flags: SymbolFlags,
        params: Vec<VariableInfo>,
    ) -> Self {
        let flags = flags.difference(SymbolFlags::STATIC);
        let mut args = Vec::with_capacity(params.len() + 1);
        args.push(VariableInfo::receiver(&owner));
        args.extend(params);
        Self::new(name, owner, return_type, complexity, flags, args)
    }

    /// A static method; `params` are taken as is
    pub fn static_method(
        name: impl Into<String>,
        owner: TypeRef,
        return_type: TypeRef,
        complexity: u64,
        flags: SymbolFlags,
        params: Vec<VariableInfo>,
    ) -> Self {
        Self::new(name, owner, return_type, complexity, flags | SymbolFlags::STATIC, params)
    }

    /// A constructor of `owner`
    pub fn constructor(owner: TypeRef, complexity: u64, flags: SymbolFlags, params: Vec<VariableInfo>) -> Self {
        let name = owner.name().to_string();
        Self::method(name, owner.clone(), owner, complexity, flags, params)
    }

    pub fn name(&self) -> &str {
        &self.symbol.name
    }

    pub fn owner(&self) -> Option<&TypeRef> {
        self.symbol.owner.as_ref()
    }

    pub fn return_type(&self) -> &TypeRef {
        &self.symbol.ty
    }

    pub fn flags(&self) -> SymbolFlags {
        self.symbol.flags
    }

    pub fn is_static(&self) -> bool {
        self.symbol.is_static()
    }

    pub fn is_final(&self) -> bool {
        self.symbol.is_final()
    }

    pub fn is_abstract(&self) -> bool {
        self.symbol.flags.contains(SymbolFlags::ABSTRACT)
    }

    pub fn is_overridable(&self) -> bool {
        !self.symbol.flags.contains(SymbolFlags::NON_OVERRIDABLE)
    }

    pub fn access(&self) -> Access {
        self.symbol.flags.access()
    }

    pub fn is_constructor(&self) -> bool {
        self.symbol.owner_name() == Some(self.name())
    }

    /// Declared parameters, or `None` when an instance member lacks its receiver slot
    pub fn params(&self) -> Option<&[VariableInfo]> {
        if self.is_static() {
            Some(&self.args)
        } else {
            self.args.get(1..)
        }
    }

    /// Same name and pairwise equal parameter types, receivers discounted.
    ///
    /// Malformed argument lists never match.
    pub fn has_equal_signature(&self, other: &FunctionInfo) -> bool {
        if self.name() != other.name() {
            return false;
        }
        match (self.params(), other.params()) {
            (Some(ours), Some(theirs)) => {
                ours.len() == theirs.len()
                    && ours.iter().zip(theirs).all(|(a, b)| a.ty() == b.ty())
            }
            _ => false,
        }
    }

    /// Whether `self` cannot override `existing` although their signatures match
    pub fn conflicts_with(&self, existing: &FunctionInfo) -> bool {
        self.return_type() != existing.return_type()
            || !existing.is_overridable()
            || (self.is_abstract() && !existing.is_abstract())
            || self.is_static() != existing.is_static()
            || existing.is_final()
            || self.access() < existing.access()
    }

    /// Java-like rendering of the declared signature, e.g. `int m(int, long)`
    pub fn signature(&self) -> String {
        let params = self
            .params()
            .unwrap_or(&[])
            .iter()
            .map(|p| p.ty().name())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}({})", self.return_type(), self.name(), params)
    }
}

/// Whether admitting `candidate` would break an override rule against any
/// signature-equal member of `existing`
pub fn is_invalid_override<'a, I>(candidate: &FunctionInfo, existing: I) -> bool
where
    I: IntoIterator<Item = &'a FunctionInfo>,
{
    existing
        .into_iter()
        .filter(|member| candidate.has_equal_signature(member))
        .any(|member| candidate.conflicts_with(member))
}
