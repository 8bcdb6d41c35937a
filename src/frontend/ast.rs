use crate::frontend::token::Token;

/// A node of the syntax tree. Every node exclusively owns its children and the tokens it was
/// built from, so a tree outlives the token buffer it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    ArrayAccess(ArrayAccess),
    Assignment(Assignment),
    BinaryOp(BinaryOp),
    Call(Call),
    Condition(Condition),
    ExpressionList(ExpressionList),
    Identifier(Identifier),
    Literal(Literal),
    Not(Not),
    ScopeAccess(ScopeAccess),
    StatementList(StatementList),
}

/// `identifier [ expression ]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAccess {
    pub identifier: Token,
    pub index: Box<Node>,
}

/// `lvalue op expression`, where `op` is one of `=`, `+=` or `-=`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub operator: Token,
    pub lvalue: Box<Node>,
    pub rvalue: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub operator: Token,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// A function-style call. Only calls in statement position may carry a block.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub identifier: Token,
    pub arguments: ExpressionList,
    pub block: Option<StatementList>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub condition: Box<Node>,
    pub block: StatementList,
    pub else_branch: Option<ElseBranch>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    /// `else if (...) { ... }`
    Condition(Box<Condition>),
    /// `else { ... }`
    Block(StatementList),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionList {
    pub expressions: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub identifier: Token,
}

/// An integer, string, `true` or `false` literal. String values keep their quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Not {
    pub expression: Box<Node>,
}

/// `identifier . inner`
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeAccess {
    pub identifier: Token,
    pub inner: Token,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementList {
    pub statements: Vec<Node>,
}

impl Node {
    pub fn name(&self) -> &'static str {
        match self {
            Node::ArrayAccess(_) => "ArrayAccess",
            Node::Assignment(_) => "Assignment",
            Node::BinaryOp(_) => "BinaryOp",
            Node::Call(_) => "Call",
            Node::Condition(_) => "Condition",
            Node::ExpressionList(_) => "ExpressionList",
            Node::Identifier(_) => "Identifier",
            Node::Literal(_) => "Literal",
            Node::Not(_) => "Not",
            Node::ScopeAccess(_) => "ScopeAccess",
            Node::StatementList(_) => "StatementList",
        }
    }

    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            Node::Assignment(_) | Node::Call(_) | Node::Condition(_)
        )
    }

    pub fn as_assignment(&self) -> Option<&Assignment> {
        match self {
            Node::Assignment(assignment) => Some(assignment),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&Call> {
        match self {
            Node::Call(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            Node::Condition(condition) => Some(condition),
            _ => None,
        }
    }

    pub fn as_statement_list(&self) -> Option<&StatementList> {
        match self {
            Node::StatementList(list) => Some(list),
            _ => None,
        }
    }

    /// Compares two trees by shape, token kinds and token text, ignoring where tokens were.
    pub fn equivalent(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::ArrayAccess(a), Node::ArrayAccess(b)) => {
                a.identifier.same_as(&b.identifier) && a.index.equivalent(&b.index)
            }
            (Node::Assignment(a), Node::Assignment(b)) => {
                a.operator.same_as(&b.operator)
                    && a.lvalue.equivalent(&b.lvalue)
                    && a.rvalue.equivalent(&b.rvalue)
            }
            (Node::BinaryOp(a), Node::BinaryOp(b)) => {
                a.operator.same_as(&b.operator)
                    && a.left.equivalent(&b.left)
                    && a.right.equivalent(&b.right)
            }
            (Node::Call(a), Node::Call(b)) => a.equivalent(b),
            (Node::Condition(a), Node::Condition(b)) => a.equivalent(b),
            (Node::ExpressionList(a), Node::ExpressionList(b)) => a.equivalent(b),
            (Node::Identifier(a), Node::Identifier(b)) => a.identifier.same_as(&b.identifier),
            (Node::Literal(a), Node::Literal(b)) => a.value.same_as(&b.value),
            (Node::Not(a), Node::Not(b)) => a.expression.equivalent(&b.expression),
            (Node::ScopeAccess(a), Node::ScopeAccess(b)) => {
                a.identifier.same_as(&b.identifier) && a.inner.same_as(&b.inner)
            }
            (Node::StatementList(a), Node::StatementList(b)) => a.equivalent(b),
            _ => false,
        }
    }
}

impl Call {
    fn equivalent(&self, other: &Call) -> bool {
        self.identifier.same_as(&other.identifier)
            && self.arguments.equivalent(&other.arguments)
            && match (&self.block, &other.block) {
                (Some(a), Some(b)) => a.equivalent(b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl Condition {
    fn equivalent(&self, other: &Condition) -> bool {
        self.condition.equivalent(&other.condition)
            && self.block.equivalent(&other.block)
            && match (&self.else_branch, &other.else_branch) {
                (Some(ElseBranch::Condition(a)), Some(ElseBranch::Condition(b))) => a.equivalent(b),
                (Some(ElseBranch::Block(a)), Some(ElseBranch::Block(b))) => a.equivalent(b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl ExpressionList {
    fn equivalent(&self, other: &ExpressionList) -> bool {
        all_equivalent(&self.expressions, &other.expressions)
    }
}

impl StatementList {
    fn equivalent(&self, other: &StatementList) -> bool {
        all_equivalent(&self.statements, &other.statements)
    }
}

fn all_equivalent(a: &[Node], b: &[Node]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.equivalent(b))
}
