use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::ast::{Expression, HostType as T, MethodCall, MethodId};

/// The string methods PostgreSQL has a direct function for. Each one maps
///  `receiver.Method(args...)` to `FUNCTION(receiver, args...)`.
#[derive(Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallRule {
    // s.Replace(a, b) => REPLACE(s, a, b)
    StringReplace,
    // s.ToUpper() => UPPER(s)
    StringToUpper,
    // s.ToLower() => LOWER(s)
    StringToLower,
    // s.Trim() => BTRIM(s)
    StringTrim,
    // s.TrimStart() => LTRIM(s)
    StringTrimStart,
    // s.TrimEnd() => RTRIM(s)
    StringTrimEnd,
}

impl CallRule {
    pub fn all() -> impl Iterator<Item = CallRule> {
        CallRule::iter()
    }

    /// The exact method this rule recognizes.
    pub fn signature(&self) -> MethodId {
        match self {
            CallRule::StringReplace => MethodId::new(T::String, "Replace", vec![T::String, T::String]),
            CallRule::StringToUpper => MethodId::new(T::String, "ToUpper", vec![]),
            CallRule::StringToLower => MethodId::new(T::String, "ToLower", vec![]),
            CallRule::StringTrim => MethodId::new(T::String, "Trim", vec![]),
            CallRule::StringTrimStart => MethodId::new(T::String, "TrimStart", vec![]),
            CallRule::StringTrimEnd => MethodId::new(T::String, "TrimEnd", vec![]),
        }
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            CallRule::StringReplace => "REPLACE",
            CallRule::StringToUpper => "UPPER",
            CallRule::StringToLower => "LOWER",
            CallRule::StringTrim => "BTRIM",
            CallRule::StringTrimStart => "LTRIM",
            CallRule::StringTrimEnd => "RTRIM",
        }
    }

    /// Rewrites `call` if it invokes exactly this rule's method, otherwise
    ///  returns `None`.
    pub fn try_translate(&self, call: &MethodCall) -> Option<Expression> {
        if call.method != self.signature() {
            return None;
        }
        self.rewrite(call)
    }

    // Assumes the signature already matched
    pub(crate) fn rewrite(&self, call: &MethodCall) -> Option<Expression> {
        // These are all instance methods: a static call with the same name
        //  is not ours
        let object = call.object.as_deref()?;
        if call.arguments.len() != call.method.parameter_types.len() {
            return None;
        }
        tracing::trace!(rule = %self, function = self.function_name(), "translated method call");

        let mut args = Vec::with_capacity(call.arguments.len() + 1);
        args.push(object.clone());
        args.extend(call.arguments.iter().cloned());
        Some(Expression::Function {
            name: self.function_name().to_string(),
            args,
            ty: call.result_type,
        })
    }
}
