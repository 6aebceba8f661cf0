//! A tiny grammar of boolean expressions evaluated against a context string.

pub enum Expression {
    /// True when the context contains the literal.
    Terminal(String),
    Or(Box<Expression>, Box<Expression>),
    And(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn terminal(data: impl Into<String>) -> Self {
        Expression::Terminal(data.into())
    }

    pub fn or(lhs: Expression, rhs: Expression) -> Self {
        Expression::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn and(lhs: Expression, rhs: Expression) -> Self {
        Expression::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn interpret(&self, context: &str) -> bool {
        match self {
            Expression::Terminal(data) => context.contains(data.as_str()),
            Expression::Or(lhs, rhs) => lhs.interpret(context) || rhs.interpret(context),
            Expression::And(lhs, rhs) => lhs.interpret(context) && rhs.interpret(context),
        }
    }
}

/// Robert or John.
pub fn male_expression() -> Expression {
    Expression::or(Expression::terminal("Robert"), Expression::terminal("John"))
}

/// Julie and Married.
pub fn married_woman_expression() -> Expression {
    Expression::and(Expression::terminal("Julie"), Expression::terminal("Married"))
}
