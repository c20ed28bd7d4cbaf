/// Semantic kind of a documented symbol, as persisted in the search index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Class,
    Method,
    Field,
    Constructor,
    Interface,
    Exception,
    Error,
    Enum,
    Trait,
    Notation,
    Package,
}

/// Classification priority order. When an index entry's context could match
/// more than one kind, the first kind here whose rule chain matches wins, so
/// reordering this list changes output for ambiguous markup.
pub const ALL: &[ElementType] = &[
    ElementType::Class,
    ElementType::Method,
    ElementType::Field,
    ElementType::Constructor,
    ElementType::Interface,
    ElementType::Exception,
    ElementType::Error,
    ElementType::Enum,
    ElementType::Trait,
    ElementType::Notation,
    ElementType::Package,
];

impl ElementType {
    /// Canonical label stored verbatim as the `type` column.
    pub fn label(self) -> &'static str {
        match self {
            ElementType::Class => "Class",
            ElementType::Method => "Method",
            ElementType::Field => "Field",
            ElementType::Constructor => "Constructor",
            ElementType::Interface => "Interface",
            ElementType::Exception => "Exception",
            ElementType::Error => "Error",
            ElementType::Enum => "Enum",
            ElementType::Trait => "Trait",
            ElementType::Notation => "Notation",
            ElementType::Package => "Package",
        }
    }
}
