//! `{name}` placeholder substitution.
//!
//! A template with a single distinct placeholder takes a string argument.
//! Otherwise the argument is a struct whose labelled string elements fill
//! the placeholder of the same name.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use weft_ir::error::{internal, invalid_argument};
use weft_ir::{uris, Intrinsic, Result, Value};

use super::static_str;
use crate::handler::{HandlerContext, IntrinsicHandler};

pub struct PromptTemplate;

const MISSING_TEMPLATE: &str = "Expected a prompt template as a string static parameter.";

fn placeholder_regex() -> Result<&'static Regex> {
    static PLACEHOLDER: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]*)\}"))
        .as_ref()
        .map_err(|e| internal(format!("Placeholder pattern failed to compile: {e}")))
}

/// Distinct placeholder names in first-seen order.
fn placeholders<'t>(regex: &Regex, template: &'t str) -> Vec<&'t str> {
    let mut names = Vec::new();
    for caps in regex.captures_iter(template) {
        if let Some(name) = caps.get(1).map(|m| m.as_str()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

fn fill_single(regex: &Regex, template: &str, argument: &Value) -> Result<String> {
    let text = argument.as_str().ok_or_else(|| {
        invalid_argument("Expected a string argument for a single-placeholder template.")
    })?;
    Ok(regex.replace_all(template, regex::NoExpand(text)).into_owned())
}

fn fill_named(regex: &Regex, template: &str, argument: &Value) -> Result<String> {
    if argument.as_struct().is_none() {
        return Err(invalid_argument(
            "Expected a struct of labelled strings for a multi-placeholder template.",
        ));
    }
    for name in placeholders(regex, template) {
        let field = argument
            .field(name)
            .ok_or_else(|| invalid_argument(format!("No argument labelled {name:?}.")))?;
        if field.as_str().is_none() {
            return Err(invalid_argument(format!("Argument {name:?} is not a string.")));
        }
    }
    let filled = regex.replace_all(template, |caps: &Captures<'_>| {
        caps.get(1)
            .and_then(|m| argument.field(m.as_str()))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    });
    Ok(filled.into_owned())
}

impl IntrinsicHandler for PromptTemplate {
    fn uri(&self) -> &str {
        uris::PROMPT_TEMPLATE
    }

    fn check_well_formed(&self, intrinsic: &Intrinsic) -> Result<()> {
        static_str(intrinsic, MISSING_TEMPLATE).map(drop)
    }

    fn execute_call(
        &self,
        intrinsic: &Intrinsic,
        argument: &Value,
        _context: &dyn HandlerContext,
    ) -> Result<Value> {
        let template = static_str(intrinsic, MISSING_TEMPLATE)?;
        let regex = placeholder_regex()?;
        let filled = match placeholders(regex, template).len() {
            0 => template.to_string(),
            1 if argument.as_struct().is_none() => fill_single(regex, template, argument)?,
            _ => fill_named(regex, template, argument)?,
        };
        Ok(Value::string(filled))
    }
}
