//! Optional jq pre-filtering of input documents via jaq.

use jaq_core::{Compiler, Ctx, RcIter, compile::Undefined, load};
use jaq_json::Val;
use serde_json::Value;

use crate::error::Error;

/// Compile `filter_src` and run it over `input`; every value the filter
/// produces becomes a separate document. `origin` names the input file for
/// error reporting.
pub fn run_filter(filter_src: &str, input: &Value, origin: &str) -> Result<Vec<Value>, Error> {
    let loader = load::Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = load::Arena::default();
    let program = load::File { code: filter_src, path: () };

    let modules = loader
        .load(&arena, program)
        .map_err(|errs| jq_error(origin, format_parse_errors(errs)))?;

    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(|errs| jq_error(origin, format_undefined_errors(errs)))?;

    let inputs = RcIter::new(core::iter::empty());
    let mut out = Vec::new();
    for item in filter.run((Ctx::new([], &inputs), Val::from(input.clone()))) {
        let produced = item.map_err(|e| jq_error(origin, format!("{e:?}")))?;
        // Val displays as JSON text; round-trip through serde_json to stay on
        // the preserve_order value model.
        let parsed = serde_json::from_str::<Value>(&produced.to_string())
            .map_err(|e| jq_error(origin, e.to_string()))?;
        out.push(parsed);
    }
    Ok(out)
}

fn jq_error(origin: &str, message: String) -> Error {
    Error::Jq { path: origin.to_string(), message }
}

fn format_parse_errors(errs: Vec<(load::File<&str, ()>, load::Error<&str>)>) -> String {
    let mut out = String::new();
    for (file, err) in errs {
        out.push_str(&format!("parse error: {err:?} in `{}`\n", file.code));
    }
    out
}

fn format_undefined_errors(
    errs: Vec<(load::File<&str, ()>, Vec<(&str, Undefined)>)>,
) -> String {
    let mut out = String::new();
    for (file, list) in errs {
        for (name, undef) in list {
            out.push_str(&format!("undefined `{name}`: {undef:?} in `{}`\n", file.code));
        }
    }
    out
}
