use super::element_type::{ElementType, ALL};

/// One candidate's context, prepared once so every evaluator shares the same
/// lowercased text.
struct RuleInput<'a> {
    lower_text: String,
    class_attr: &'a str,
}

impl<'a> RuleInput<'a> {
    fn new(text: &str, class_attr: &'a str) -> Self {
        RuleInput {
            lower_text: text.to_lowercase(),
            class_attr,
        }
    }

    /// Case-insensitive substring check on the term text.
    fn text_has(&self, needle: &str) -> bool {
        self.lower_text.contains(needle)
    }

    /// Exact-case suffix check on the dt class attribute. Class names are
    /// case-sensitive tokens, so no lowercasing here.
    fn class_ends_with(&self, suffix: &str) -> bool {
        self.class_attr.ends_with(suffix)
    }
}

type Evaluator = fn(&RuleInput) -> bool;

/// Per-type rule chains, tried in declared order with OR semantics.
/// Method and Field each get a "static" variant ahead of the generic one.
const CHAINS: &[(ElementType, &[Evaluator])] = &[
    (ElementType::Class, &[is_class]),
    (ElementType::Method, &[is_static_method, is_method]),
    (ElementType::Field, &[is_static_field, is_field]),
    (ElementType::Constructor, &[is_constructor]),
    (ElementType::Interface, &[is_interface]),
    (ElementType::Exception, &[is_exception]),
    (ElementType::Error, &[is_error]),
    (ElementType::Enum, &[is_enum]),
    (ElementType::Trait, &[is_trait]),
    (ElementType::Notation, &[is_notation]),
    (ElementType::Package, &[is_package]),
];

/// Map one candidate's (term text, class attribute) to a kind, or `None` when
/// no rule matches. Walks kinds in priority order; the first chain with any
/// matching evaluator wins.
pub fn classify(text: &str, class_attr: &str) -> Option<ElementType> {
    let input = RuleInput::new(text, class_attr);

    for element_type in ALL {
        let chain = CHAINS
            .iter()
            .find(|(t, _)| t == element_type)
            .map(|(_, c)| *c)
            .unwrap_or(&[]);

        if chain.iter().any(|evaluator| evaluator(&input)) {
            return Some(*element_type);
        }
    }

    None
}

fn is_class(input: &RuleInput) -> bool {
    input.text_has("class in") || input.text_has("- class") || input.class_ends_with("class")
}

fn is_static_method(input: &RuleInput) -> bool {
    input.text_has("static method in") || input.class_ends_with("method")
}

fn is_method(input: &RuleInput) -> bool {
    input.text_has("method in")
}

fn is_static_field(input: &RuleInput) -> bool {
    input.text_has("static variable in")
        || input.text_has("field in")
        || input.class_ends_with("field")
}

fn is_field(input: &RuleInput) -> bool {
    input.text_has("variable in")
}

fn is_constructor(input: &RuleInput) -> bool {
    input.text_has("constructor") || input.class_ends_with("constructor")
}

fn is_interface(input: &RuleInput) -> bool {
    input.text_has("interface in")
        || input.text_has("- interface")
        || input.class_ends_with("interface")
}

fn is_exception(input: &RuleInput) -> bool {
    input.text_has("exception in")
        || input.text_has("- exception")
        || input.class_ends_with("exception")
}

fn is_error(input: &RuleInput) -> bool {
    input.text_has("error in") || input.text_has("- error") || input.class_ends_with("error")
}

fn is_enum(input: &RuleInput) -> bool {
    input.text_has("enum in") || input.text_has("- enum") || input.class_ends_with("enum")
}

fn is_trait(input: &RuleInput) -> bool {
    input.text_has("trait in")
}

fn is_notation(input: &RuleInput) -> bool {
    input.text_has("annotation type") || input.class_ends_with("annotation")
}

fn is_package(input: &RuleInput) -> bool {
    input.text_has("package") || input.class_ends_with("package")
}
