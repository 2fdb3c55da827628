use proc_macro::TokenStream as TokenStream1;
use quote::ToTokens;

/// This macro is added before a command method of `Session` in the impl block.
/// Use this macro to first check if the current session state is exactly the
/// state in the attribute. Any further names in the attribute are eligibility
/// predicates, i.e. `&self` methods returning `bool`, which must all hold too.
///
/// For example, `#[allowed_state(Playing, can_split)]` will make a method first
/// check if the session is in `Playing` state and `self.can_split()` is true.
/// If not, the method logs the ignored command and returns the default value
/// of its return type (`None` for an `Option`) without touching the session.
#[proc_macro_attribute]
pub fn allowed_state(attr: TokenStream1, item: TokenStream1) -> TokenStream1 {
    let mut ast: syn::ImplItemFn = syn::parse(item).unwrap();
    let attr = attr.to_string();
    let mut args = attr.split(',').map(str::trim).filter(|arg| !arg.is_empty());
    let state = args
        .next()
        .expect("allowed_state needs a SessionState variant");
    let predicates: Vec<&str> = args.collect();
    let function_name = ast.sig.ident.to_string();

    let code = guard_code(state, &predicates, &function_name);
    let early_return: TokenStream1 = code.parse().unwrap();
    let early_return: syn::Stmt = syn::parse(early_return).unwrap();
    ast.block.stmts.insert(0, early_return);
    ast.into_token_stream().into()
}

fn guard_code(state: &str, predicates: &[&str], function_name: &str) -> String {
    let mut condition = format!("self.state != SessionState::{}", state);
    for predicate in predicates {
        condition.push_str(&format!(" || !self.{}()", predicate));
    }
    format!(
        r#"
    if {} {{
        log::debug!("{} ignored in {{:?}} state", self.state);
        return ::core::default::Default::default();
    }}
"#,
        condition, function_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_checks_state_only() {
        let code = guard_code("Playing", &[], "hit");
        assert!(code.contains("if self.state != SessionState::Playing {"));
        assert!(code.contains("\"hit ignored in {:?} state\""));
    }

    #[test]
    fn guard_checks_every_predicate() {
        let code = guard_code("Playing", &["can_split", "has_up_card"], "split");
        assert!(code.contains(
            "self.state != SessionState::Playing || !self.can_split() || !self.has_up_card()"
        ));
    }

    #[test]
    fn guard_parses_as_statement() {
        let code = guard_code("Playing", &["can_double_down"], "double_down");
        let stmt: Result<syn::Stmt, _> = syn::parse_str(&code);
        assert!(stmt.is_ok());
    }
}
