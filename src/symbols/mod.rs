//! Symbols of a generated program
//!
//! Variables and functions are plain records of name, owning class, type and
//! flags. Classes are referred to by name; [`TypeHierarchy`] is the index that
//! knows how they relate.

mod function_info;
mod hierarchy;

pub use function_info::*;
pub use hierarchy::*;

use std::fmt;
use std::hash::{Hash, Hasher};

/// Type of a value, a symbol or a node result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Void,
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Class(String),
}

impl TypeRef {
    pub fn class(name: impl Into<String>) -> Self {
        TypeRef::Class(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            TypeRef::Void => "void",
            TypeRef::Boolean => "boolean",
            TypeRef::Char => "char",
            TypeRef::Byte => "byte",
            TypeRef::Short => "short",
            TypeRef::Int => "int",
            TypeRef::Long => "long",
            TypeRef::Float => "float",
            TypeRef::Double => "double",
            TypeRef::Class(name) => name,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    pub fn is_class(&self) -> bool {
        matches!(self, TypeRef::Class(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Modifier bits of a symbol.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SymbolFlags: u16 {
        const PRIVATE = 0x001;
        /// Package-private access.
        const DEFAULT = 0x002;
        const PROTECTED = 0x004;
        const PUBLIC = 0x008;
        const STATIC = 0x010;
        const FINAL = 0x020;
        const ABSTRACT = 0x040;
        /// The generator must not synthesize overrides of this member.
        const NON_OVERRIDABLE = 0x080;
        const SYNCHRONIZED = 0x100;
    }
}

impl SymbolFlags {
    /// Widest access bit present; no access bit means package access
    pub fn access(self) -> Access {
        if self.contains(SymbolFlags::PUBLIC) {
            Access::Public
        } else if self.contains(SymbolFlags::PROTECTED) {
            Access::Protected
        } else if self.contains(SymbolFlags::PRIVATE) && !self.contains(SymbolFlags::DEFAULT) {
            Access::Private
        } else {
            Access::Package
        }
    }

    /// Java keywords for the set modifiers, each followed by a space
    pub fn keywords(self) -> String {
        let mut out = String::new();
        match self.access() {
            Access::Public => out.push_str("public "),
            Access::Protected => out.push_str("protected "),
            Access::Private => out.push_str("private "),
            Access::Package => {}
        }
        for (flag, word) in [
            (SymbolFlags::ABSTRACT, "abstract "),
            (SymbolFlags::STATIC, "static "),
            (SymbolFlags::FINAL, "final "),
            (SymbolFlags::SYNCHRONIZED, "synchronized "),
        ] {
            if self.contains(flag) {
                out.push_str(word);
            }
        }
        out
    }
}

/// Access level, ordered from narrowest to widest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Access {
    Private,
    Package,
    Protected,
    Public,
}

/// A named, typed entity owned by a class (or by no class, for locals)
///
/// Equality is structural over name, owner and flags; the declared type does
/// not take part.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub owner: Option<TypeRef>,
    pub ty: TypeRef,
    pub flags: SymbolFlags,
}

impl Symbol {
    pub fn new(name: impl Into<String>, owner: Option<TypeRef>, ty: TypeRef, flags: SymbolFlags) -> Self {
        Self {
            name: name.into(),
            owner,
            ty,
            flags,
        }
    }

    pub fn is_static(&self) -> bool {
        self.flags.contains(SymbolFlags::STATIC)
    }

    pub fn is_final(&self) -> bool {
        self.flags.contains(SymbolFlags::FINAL)
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().map(TypeRef::name)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.owner == other.owner && self.flags == other.flags
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.owner.hash(state);
        self.flags.hash(state);
    }
}

/// A local variable, parameter or field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableInfo {
    pub symbol: Symbol,
}

impl VariableInfo {
    pub fn new(name: impl Into<String>, owner: Option<TypeRef>, ty: TypeRef, flags: SymbolFlags) -> Self {
        Self {
            symbol: Symbol::new(name, owner, ty, flags),
        }
    }

    /// A method-local variable with no modifiers
    pub fn local(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, None, ty, SymbolFlags::empty())
    }

    /// The implicit `this` slot of an instance member of `owner`
    pub fn receiver(owner: &TypeRef) -> Self {
        Self::new("this", Some(owner.clone()), owner.clone(), SymbolFlags::FINAL)
    }

    pub fn name(&self) -> &str {
        &self.symbol.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.symbol.ty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_ordering() {
        assert!(Access::Private < Access::Package);
        assert!(Access::Package < Access::Protected);
        assert!(Access::Protected < Access::Public);
    }

    #[test]
    fn test_access_from_flags() {
        assert_eq!(SymbolFlags::empty().access(), Access::Package);
        assert_eq!(SymbolFlags::DEFAULT.access(), Access::Package);
        assert_eq!((SymbolFlags::PRIVATE | SymbolFlags::STATIC).access(), Access::Private);
        assert_eq!((SymbolFlags::PUBLIC | SymbolFlags::FINAL).access(), Access::Public);
    }

    #[test]
    fn test_symbol_equality_ignores_type() {
        let a = Symbol::new("x", None, TypeRef::Int, SymbolFlags::empty());
        let b = Symbol::new("x", None, TypeRef::Long, SymbolFlags::empty());
        let c = Symbol::new("x", None, TypeRef::Int, SymbolFlags::FINAL);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_keywords() {
        let flags = SymbolFlags::PUBLIC | SymbolFlags::STATIC | SymbolFlags::FINAL;
        assert_eq!(flags.keywords(), "public static final ");
        assert_eq!(SymbolFlags::empty().keywords(), "");
    }
}
