//! Statement and expression rendering.

use crate::options::GeneratorOptions;
use xsdcode_model::{Expression, Literal, Statement};

/// Renders statements and expressions as single lines of C#.
pub struct ExpressionRenderer<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> ExpressionRenderer<'a> {
    /// Creates a new expression renderer.
    #[must_use]
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    /// Renders a statement, including its terminator.
    #[must_use]
    pub fn statement(&self, statement: &Statement) -> String {
        match statement {
            Statement::Return(None) => "return;".to_string(),
            Statement::Return(Some(value)) => format!("return {};", self.expression(value)),
            Statement::Assign { target, value } => {
                format!("{} = {};", self.expression(target), self.expression(value))
            }
            Statement::Expression(expr) => format!("{};", self.expression(expr)),
            Statement::Other(snippet) => snippet.text.clone(),
        }
    }

    /// Renders an expression.
    #[must_use]
    pub fn expression(&self, expr: &Expression) -> String {
        match expr {
            Expression::FieldReference(name) | Expression::PropertyReference(name) => {
                self.member_access(name)
            }
            Expression::Argument(name) => name.clone(),
            Expression::This => "this".to_string(),
            Expression::Literal(literal) => render_literal(literal),
            Expression::New {
                type_name,
                arguments,
            } => {
                let args: Vec<_> = arguments.iter().map(|a| self.expression(a)).collect();
                format!("new {}({})", type_name, args.join(", "))
            }
            Expression::Other(snippet) => snippet.text.clone(),
        }
    }

    fn member_access(&self, name: &str) -> String {
        if self.options.this_qualifier() {
            format!("this.{name}")
        } else {
            name.to_string()
        }
    }
}

/// Renders a literal value.
#[must_use]
pub fn render_literal(literal: &Literal) -> String {
    match literal {
        Literal::Null => "null".to_string(),
        Literal::Bool(b) => b.to_string(),
        Literal::Int(i) => i.to_string(),
        Literal::Str(s) => {
            let mut out = String::with_capacity(s.len() + 2);
            out.push('"');
            for c in s.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    _ => out.push(c),
                }
            }
            out.push('"');
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_statements() {
        let options = GeneratorOptions::default();
        let r = ExpressionRenderer::new(&options);

        assert_eq!(r.statement(&Statement::return_field("_name")), "return this._name;");
        assert_eq!(r.statement(&Statement::Return(None)), "return;");
        assert_eq!(
            r.statement(&Statement::assign_field(
                "_items",
                Expression::new_object("List<Item>")
            )),
            "this._items = new List<Item>();"
        );
        assert_eq!(r.statement(&Statement::other("Init();")), "Init();");
    }

    #[test]
    fn test_render_without_this_qualifier() {
        let options = GeneratorOptions::new().emit_this_qualifier(false);
        let r = ExpressionRenderer::new(&options);
        assert_eq!(
            r.statement(&Statement::assign_field(
                "_name",
                Expression::Argument("value".to_string())
            )),
            "_name = value;"
        );
    }

    #[test]
    fn test_render_new_with_arguments() {
        let options = GeneratorOptions::default();
        let r = ExpressionRenderer::new(&options);
        let expr = Expression::New {
            type_name: "Point".to_string(),
            arguments: vec![Literal::Int(1).into(), Literal::Int(-2).into()],
        };
        assert_eq!(r.expression(&expr), "new Point(1, -2)");
    }

    #[test]
    fn test_render_literals() {
        assert_eq!(render_literal(&Literal::Null), "null");
        assert_eq!(render_literal(&Literal::Bool(false)), "false");
        assert_eq!(
            render_literal(&Literal::Str("say \"hi\"\\".to_string())),
            r#""say \"hi\"\\""#
        );
    }
}
