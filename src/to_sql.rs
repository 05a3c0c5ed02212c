use std::fmt::{Display, Formatter, Result};

use crate::{
    ast::{Expression, MethodCall, Value},
    error::Error,
    geometry::Shape,
    literal::format_f64,
};

/// Prints a translated tree as PostgreSQL text. Only trees without method
///  calls can be wrapped, so printing itself never fails.
pub struct Printer<T> {
    tree: T,
}

impl<T> Printer<T>
where
    T: ToSQL,
{
    /// Fails with [`Error::UnsupportedMethod`] if `tree` still holds a method
    ///  call: translate it first.
    pub fn new(tree: T) -> std::result::Result<Self, Error> {
        if let Some(call) = tree.untranslated_call() {
            return Err(Error::UnsupportedMethod(call.method.to_string()));
        }
        Ok(Self { tree })
    }
}

pub trait ToSQL {
    /// Writes SQL text. Returns `std::fmt::Error` on an untranslated method
    ///  call, which [`Printer`] rules out up front.
    fn to_sql(&self, out: &mut Formatter) -> Result;

    /// The first method call no rule has rewritten yet, if any.
    fn untranslated_call(&self) -> Option<&MethodCall> {
        None
    }
}

impl<T> ToSQL for &T
where
    T: ToSQL,
{
    fn to_sql(&self, out: &mut Formatter) -> Result {
        T::to_sql(self, out)
    }
    fn untranslated_call(&self) -> Option<&MethodCall> {
        T::untranslated_call(self)
    }
}

impl<T> ToSQL for Box<T>
where
    T: ToSQL,
{
    fn to_sql(&self, out: &mut Formatter) -> Result {
        self.as_ref().to_sql(out)
    }
    fn untranslated_call(&self) -> Option<&MethodCall> {
        self.as_ref().untranslated_call()
    }
}

impl<T> Display for Printer<T>
where
    T: ToSQL,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.tree.to_sql(f)
    }
}

/// Escapes a string for use inside a standard-conforming single-quoted
///  literal: quotes are doubled, backslashes are ordinary characters.
pub fn escape_single_quotes(s: &str) -> String {
    s.replace('\'', "''")
}

/// Quotes an identifier, doubling any embedded double quotes.
pub fn quote_identifier(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

impl ToSQL for Shape {
    fn to_sql(&self, out: &mut Formatter) -> Result {
        out.write_str(&self.to_literal())
    }
}

impl ToSQL for Value {
    fn to_sql(&self, out: &mut Formatter) -> Result {
        match self {
            Value::Null => write!(out, "NULL"),
            Value::Bool(v) => write!(out, "{}", if *v { "TRUE" } else { "FALSE" }),
            Value::Int(v) => write!(out, "{v}"),
            Value::Double(v) if v.is_finite() => write!(out, "{}", format_f64(*v)),
            // NaN and the infinities are only valid as quoted float8 input
            Value::Double(v) => write!(out, "'{}'::double precision", format_f64(*v)),
            Value::Text(v) => write!(out, "'{}'", escape_single_quotes(v)),
            Value::Shape(v) => v.to_sql(out),
        }
    }
}

impl ToSQL for Expression {
    fn to_sql(&self, out: &mut Formatter) -> Result {
        match self {
            Expression::Constant(v) => v.to_sql(out),
            Expression::Column { table, name, .. } => {
                if let Some(table) = table {
                    write!(out, "{}.", quote_identifier(table))?;
                }
                out.write_str(&quote_identifier(name))
            }
            Expression::Parameter { name, .. } => write!(out, "@{name}"),
            Expression::Function { name, args, .. } => {
                write!(out, "{name}(")?;
                let mut is_first = true;
                for arg in args.iter() {
                    if is_first {
                        is_first = false;
                    } else {
                        write!(out, ",")?;
                    }
                    arg.to_sql(out)?;
                }
                write!(out, ")")
            }
            Expression::Call(call) => {
                tracing::debug!(method = %call.method, "refusing to print an untranslated call");
                Err(std::fmt::Error)
            }
        }
    }

    fn untranslated_call(&self) -> Option<&MethodCall> {
        match self {
            Expression::Constant(_) | Expression::Column { .. } | Expression::Parameter { .. } => {
                None
            }
            Expression::Call(call) => Some(call),
            Expression::Function { args, .. } => args.iter().find_map(|a| a.untranslated_call()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{HostType, MethodCall, MethodId},
        geometry::{Circle, Point},
    };

    fn print(e: &Expression) -> String {
        Printer::new(e).unwrap().to_string()
    }

    #[test]
    fn test_escape_single_quotes() {
        assert_eq!("foo", escape_single_quotes("foo"));
        assert_eq!("''", escape_single_quotes("'"));
        assert_eq!(r"\''", escape_single_quotes(r"\'"));
        assert_eq!("it''s", escape_single_quotes("it's"));
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("name"), r#""name""#);
        assert_eq!(quote_identifier(r#"a"b"#), r#""a""b""#);
        assert_eq!(quote_identifier(""), r#""""#);
    }

    #[test]
    fn quotes_inside_column_names_stay_inside_the_identifier() {
        let col = Expression::column(
            Some(r#"t"x"#),
            r#"a"; DROP TABLE t; --"#,
            HostType::String,
        );
        assert_eq!(print(&col), r#""t""x"."a""; DROP TABLE t; --""#);
    }

    #[test]
    fn constants() {
        assert_eq!(print(&Value::Null.into()), "NULL");
        assert_eq!(print(&true.into()), "TRUE");
        assert_eq!(print(&42i64.into()), "42");
        assert_eq!(print(&2.5f64.into()), "2.5");
        assert_eq!(print(&3.0f64.into()), "3");
        assert_eq!(print(&f64::NAN.into()), "'NaN'::double precision");
        assert_eq!(print(&"O'Brien".into()), "'O''Brien'");
    }

    #[test]
    fn shapes_print_as_literals() {
        let c: Shape = Circle::new(Point::new(1.5, -2.0), 3.0).into();
        assert_eq!(print(&c.into()), "CIRCLE '<(1.5,-2),3>'");
    }

    #[test]
    fn columns_and_parameters() {
        assert_eq!(
            print(&Expression::column(Some("t"), "Name", HostType::String)),
            r#""t"."Name""#
        );
        assert_eq!(print(&Expression::column(None, "x", HostType::Int32)), r#""x""#);
        let p = Expression::Parameter {
            name: "p0".into(),
            ty: HostType::String,
        };
        assert_eq!(print(&p), "@p0");
    }

    #[test]
    fn function_call() {
        let f = Expression::Function {
            name: "REPLACE".into(),
            args: vec![
                Expression::column(None, "s", HostType::String),
                "a".into(),
                "b".into(),
            ],
            ty: HostType::String,
        };
        assert_eq!(print(&f), r#"REPLACE("s",'a','b')"#);
    }

    fn foo_call() -> Expression {
        Expression::Call(MethodCall::static_call(
            MethodId::new(HostType::Object, "Foo", vec![]),
            vec![],
            HostType::Object,
        ))
    }

    #[test]
    fn untranslated_call_is_rejected_before_printing() {
        let call = foo_call();
        assert_eq!(
            Printer::new(&call).err(),
            Some(Error::UnsupportedMethod("Object.Foo()".into()))
        );
    }

    #[test]
    fn untranslated_call_nested_in_function_is_rejected() {
        let f = Expression::Function {
            name: "UPPER".into(),
            args: vec!["a".into(), foo_call()],
            ty: HostType::String,
        };
        assert_eq!(
            Printer::new(&f).err(),
            Some(Error::UnsupportedMethod("Object.Foo()".into()))
        );
        // A tree that was accepted always prints
        let ok = Expression::Function {
            name: "UPPER".into(),
            args: vec!["a".into()],
            ty: HostType::String,
        };
        assert_eq!(Printer::new(&ok).map(|p| p.to_string()), Ok("UPPER('a')".to_string()));
    }
}
