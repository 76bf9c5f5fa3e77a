//! Combinator macros for the pledge promise runtime.
//!
//! The macros are dependency-free and expand to plain `poll_fn`
//! futures, so they work on promises and on any other future alike.

mod utils;

use proc_macro::TokenStream;

/// Awaits every future concurrently and yields a tuple of their
/// outputs, in argument order.
///
/// The futures are polled round-robin from a single suspension point,
/// so they interleave with each other and with the rest of the
/// runtime at their own suspension points.
///
/// ```rust,ignore
/// let (a, b) = all!(fetch_user(1), fetch_user(2));
/// ```
#[proc_macro]
pub fn all(input: TokenStream) -> TokenStream {
    let args = utils::split_args(input);
    let count = args.len();

    if count == 0 {
        return "()".parse().unwrap();
    }

    if count == 1 {
        let expr = utils::tokens_to_string(&args[0]);
        return format!("{{ {expr}.await }}").parse().unwrap();
    }

    let mut out = String::new();
    out.push_str("{\n");

    for (i, tokens) in args.iter().enumerate() {
        let idx = i + 1;
        let expr = utils::tokens_to_string(tokens);
        out.push_str(&format!(
            "let mut __slot{idx} = (::std::boxed::Box::pin({expr}), ::core::option::Option::None::<_>);\n"
        ));
    }

    out.push_str("::std::future::poll_fn(move |cx| {\n");
    out.push_str("    use ::std::future::Future;\n");
    out.push_str("    use ::std::task::Poll;\n");

    for i in 1..=count {
        out.push_str(&format!(
            "    if __slot{i}.1.is_none() {{\n\
                    if let Poll::Ready(val) = __slot{i}.0.as_mut().poll(cx) {{\n\
                        __slot{i}.1 = ::core::option::Option::Some(val);\n\
                    }}\n\
                }}\n"
        ));
    }

    let all_settled = (1..=count)
        .map(|i| format!("__slot{i}.1.is_some()"))
        .collect::<Vec<_>>()
        .join(" && ");

    out.push_str(&format!("    if {all_settled} {{\n"));
    out.push_str("        Poll::Ready((\n");

    for i in 1..=count {
        out.push_str(&format!("            __slot{i}.1.take().unwrap(),\n"));
    }

    out.push_str("        ))\n");
    out.push_str("    } else {\n");
    out.push_str("        Poll::Pending\n");
    out.push_str("    }\n");
    out.push_str("}).await\n");
    out.push_str("}\n");

    out.parse().unwrap_or_else(|err| {
        let msg = format!("all macro error: {err}");
        format!("compile_error!(\"{}\");", msg).parse().unwrap()
    })
}

/// Awaits the first of several same-typed futures to finish and
/// yields its output, dropping the others.
///
/// Losing futures are only dropped as observers: a promise passed to
/// `race!` keeps running after the race is decided, since the
/// underlying computation has no cancellation signal. Earlier
/// arguments win ties.
///
/// ```rust,ignore
/// let outcome = race!(work, deadline);
/// ```
#[proc_macro]
pub fn race(input: TokenStream) -> TokenStream {
    let args = utils::split_args(input);
    let count = args.len();

    if count == 0 {
        return "compile_error!(\"race! requires at least one future\");"
            .parse()
            .unwrap();
    }

    if count == 1 {
        let expr = utils::tokens_to_string(&args[0]);
        return format!("{{ {expr}.await }}").parse().unwrap();
    }

    let mut out = String::new();
    out.push_str("{\n");

    for (i, tokens) in args.iter().enumerate() {
        let idx = i + 1;
        let expr = utils::tokens_to_string(tokens);
        out.push_str(&format!(
            "let mut __contender{idx} = ::std::boxed::Box::pin({expr});\n"
        ));
    }

    out.push_str("::std::future::poll_fn(move |cx| {\n");
    out.push_str("    use ::std::future::Future;\n");
    out.push_str("    use ::std::task::Poll;\n");

    for i in 1..=count {
        out.push_str(&format!(
            "    if let Poll::Ready(val) = __contender{i}.as_mut().poll(cx) {{\n\
                    return Poll::Ready(val);\n\
                }}\n"
        ));
    }

    out.push_str("    Poll::Pending\n");
    out.push_str("}).await\n");
    out.push_str("}\n");

    out.parse().unwrap_or_else(|err| {
        let msg = format!("race macro error: {err}");
        format!("compile_error!(\"{}\");", msg).parse().unwrap()
    })
}
