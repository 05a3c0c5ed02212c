//! Rewrites host method calls into SQL function calls.
//!
//! Each recognized method is one [`CallRule`]. A rule either rewrites a call
//!  or declines with `None`; declining is ordinary control flow, not an error.
//!  The [`Translator`] holds the rules, built once, and walks whole trees.

use crate::{
    ast::{Expression, MethodCall, MethodId},
    error::Error,
    to_sql::Printer,
};

pub mod postgres;

pub use postgres::CallRule;

/// A fixed table of (signature, rule) pairs. Signatures are captured once at
///  construction so matching a call is a plain equality check.
#[derive(Debug, Clone)]
pub struct Translator {
    rules: Vec<(MethodId, CallRule)>,
}

impl Default for Translator {
    /// A translator with every built-in rule.
    fn default() -> Self {
        Self::with_rules(CallRule::all())
    }
}

impl Translator {
    pub fn with_rules(rules: impl IntoIterator<Item = CallRule>) -> Self {
        Self {
            rules: rules.into_iter().map(|r| (r.signature(), r)).collect(),
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = CallRule> + '_ {
        self.rules.iter().map(|(_, rule)| *rule)
    }

    /// Offers `call` to the rule registered for its method, if any. Returns
    ///  `None` when no rule applies.
    pub fn translate_call(&self, call: &MethodCall) -> Option<Expression> {
        let (_, rule) = self.rules.iter().find(|(sig, _)| *sig == call.method)?;
        rule.rewrite(call)
    }

    /// Translates a whole tree bottom-up. Every method call must be rewritten
    ///  by some rule; the first one that isn't is reported as
    ///  [`Error::UnsupportedMethod`].
    pub fn translate(&self, source: &Expression) -> Result<Expression, Error> {
        match source {
            Expression::Constant(_) | Expression::Column { .. } | Expression::Parameter { .. } => {
                Ok(source.clone())
            }
            Expression::Function { name, args, ty } => Ok(Expression::Function {
                name: name.clone(),
                args: self.translate_all(args)?,
                ty: *ty,
            }),
            Expression::Call(call) => {
                let object = match &call.object {
                    Some(object) => Some(Box::new(self.translate(object)?)),
                    None => None,
                };
                let call = MethodCall {
                    method: call.method.clone(),
                    object,
                    arguments: self.translate_all(&call.arguments)?,
                    result_type: call.result_type,
                };
                self.translate_call(&call).ok_or_else(|| {
                    tracing::debug!(method = %call.method, "no translation rule for method");
                    Error::UnsupportedMethod(call.method.to_string())
                })
            }
        }
    }

    fn translate_all(&self, exprs: &[Expression]) -> Result<Vec<Expression>, Error> {
        exprs.iter().map(|e| self.translate(e)).collect()
    }

    /// Translates `source` and prints the result as SQL text.
    pub fn generate_sql(&self, source: &Expression) -> Result<String, Error> {
        let tree = self.translate(source)?;
        Ok(Printer::new(&tree)?.to_string())
    }
}
