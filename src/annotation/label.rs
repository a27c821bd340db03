use super::tags::LowLevelTag;

/// Separator used to render a structural path as a context string.
pub const CONTEXT_SEPARATOR: &str = " > ";

/// Remove a trailing sibling index such as the `[2]` in `For[2]`.
///
/// Brackets that don't hold a plain number are left alone so literal values
/// like `Const: [1, 2]` survive.
pub fn strip_index(label: &str) -> &str {
    let trimmed = label.trim_end();
    if let Some(inner) = trimmed.strip_suffix(']') {
        if let Some(open) = inner.rfind('[') {
            let index = &inner[open + 1..];
            if index.chars().all(|c| c.is_ascii_digit()) {
                return &inner[..open];
            }
        }
    }
    label
}

/// Render a structural path as the `" > "`-joined, index-stripped context
/// string used for pattern matching.
pub fn render_context<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|p| strip_index(p.as_ref()))
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

/// A parsed node label: `Category` or `Category: value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLabel<'a> {
    /// The label with its sibling index removed
    text: &'a str,
    /// Upper-cased category token
    category: String,
    /// Trimmed text after the first colon, `None` when there is no colon
    value: Option<&'a str>,
}

/// The part of a label that decides whether two labels denote the same node.
pub type LabelIdentity = (String, Option<String>);

impl<'a> NodeLabel<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let text = strip_index(raw);
        match text.split_once(':') {
            Some((category, value)) => Self {
                text,
                category: category.trim().to_uppercase(),
                value: Some(value.trim()),
            },
            None => Self {
                text,
                category: text.trim().to_uppercase(),
                value: None,
            },
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// Whether the label is only a category with no colon-separated value.
    pub fn is_bare(&self) -> bool {
        self.value.is_none()
    }

    pub fn identity(&self) -> LabelIdentity {
        (self.category.clone(), self.value.map(str::to_string))
    }

    pub fn construct(&self) -> Option<Construct> {
        Construct::from_category(&self.category)
    }
}

/// Program constructs the detectors report on.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Construct {
    For,
    While,
    If,
    Call,
    Assign,
    Function,
    Return,
    Const,
    Operation,
    Argument,
    Variable,
}

impl Construct {
    /// Map an upper-cased category token to a construct.
    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            "FOR" => Some(Construct::For),
            "WHILE" => Some(Construct::While),
            "IF" => Some(Construct::If),
            "CALL" => Some(Construct::Call),
            "ASSIGN" => Some(Construct::Assign),
            "FUNCTION" | "FUNCTIONDEF" => Some(Construct::Function),
            "RETURN" => Some(Construct::Return),
            "CONST" => Some(Construct::Const),
            "OPERATION" => Some(Construct::Operation),
            "ARG" | "ARGUMENT" => Some(Construct::Argument),
            "VAR" => Some(Construct::Variable),
            _ => None,
        }
    }

    pub fn missing_tag(&self) -> LowLevelTag {
        match self {
            Construct::For => LowLevelTag::MissingForLoop,
            Construct::While => LowLevelTag::MissingWhileLoop,
            Construct::If => LowLevelTag::MissingIfStatement,
            Construct::Call => LowLevelTag::MissingCallStatement,
            Construct::Assign => LowLevelTag::MissingAssignStatement,
            Construct::Function => LowLevelTag::MissingFunctionDefinition,
            Construct::Return => LowLevelTag::MissingReturn,
            Construct::Const => LowLevelTag::MissingConstValue,
            Construct::Operation => LowLevelTag::MissingOperation,
            Construct::Argument => LowLevelTag::MissingArgument,
            Construct::Variable => LowLevelTag::MissingVariable,
        }
    }

    pub fn unnecessary_tag(&self) -> LowLevelTag {
        match self {
            Construct::For => LowLevelTag::UnnecessaryForLoop,
            Construct::While => LowLevelTag::UnnecessaryWhileLoop,
            Construct::If => LowLevelTag::UnnecessaryConditional,
            Construct::Call => LowLevelTag::UnnecessaryCallStatement,
            Construct::Assign => LowLevelTag::UnnecessaryAssignStatement,
            Construct::Function => LowLevelTag::UnnecessaryFunction,
            Construct::Return => LowLevelTag::UnnecessaryReturn,
            Construct::Const => LowLevelTag::UnnecessaryConstValue,
            Construct::Operation => LowLevelTag::UnnecessaryOperation,
            Construct::Argument => LowLevelTag::UnnecessaryArgument,
            Construct::Variable => LowLevelTag::UnnecessaryVariable,
        }
    }

    /// Only statements can be reported as misplaced.
    pub fn position_tag(&self) -> Option<LowLevelTag> {
        match self {
            Construct::For => Some(LowLevelTag::IncorrectStatementPositionFor),
            Construct::While => Some(LowLevelTag::IncorrectStatementPositionWhile),
            Construct::If => Some(LowLevelTag::IncorrectStatementPositionIf),
            Construct::Call => Some(LowLevelTag::IncorrectStatementPositionCall),
            Construct::Assign => Some(LowLevelTag::IncorrectStatementPositionAssign),
            Construct::Function => Some(LowLevelTag::IncorrectStatementPositionFunction),
            Construct::Return => Some(LowLevelTag::IncorrectStatementPositionReturn),
            Construct::Const | Construct::Operation | Construct::Argument | Construct::Variable => {
                None
            }
        }
    }
}
