//! The two arity-polymorphic delegate-stub generators.
//!
//! For each arity `n` in `1..=15`, emit one self-contained xUnit test case that
//! instantiates an n-ary no-op callable (`EmptyAction` or `EmptyFunc`) and
//! invokes it with `n` synthesized argument literals. The func variant also
//! asserts the stub returns the default value of its declared return type.

use std::io::Write;

use tracing::{debug, info};

use super::emit::Emitter;
use super::templates::{render_unit, StubBindings, ACTION_CASE, FUNC_CASE};
use crate::literals::{hex_args, LiteralSource};

/// Highest generated arity; the domain is `1..=MAX_ARITY`, ascending.
pub const MAX_ARITY: usize = 15;

/// The arity parameter domain, in emission order.
pub fn arity_domain() -> std::ops::RangeInclusive<usize> {
    1..=MAX_ARITY
}

/// Representative type token standing in for "any type" in the generated
/// delegate signatures.
const STUB_TYPE: &str = "int";

pub(super) fn stub_bindings(n: usize, literals: &mut dyn LiteralSource) -> StubBindings {
    StubBindings {
        n,
        types: vec![STUB_TYPE; n].join(", "),
        args: hex_args(literals, n),
    }
}

fn write_stub_cases<W: Write>(
    out: W,
    template: &'static str,
    literals: &mut dyn LiteralSource,
) -> anyhow::Result<()> {
    let mut emitter = Emitter::new(out);
    for n in arity_domain() {
        let unit = render_unit(template, &stub_bindings(n, literals))?;
        debug!(n, "rendered stub test case");
        emitter.unit(&unit)?;
    }
    info!(cases = MAX_ARITY, "stub generation pass complete");
    Ok(())
}

/// Emits the `EmptyAction` test cases for arities 1 through 15.
pub fn write_action_tests<W: Write>(out: W, literals: &mut dyn LiteralSource) -> anyhow::Result<()> {
    write_stub_cases(out, ACTION_CASE, literals)
}

/// Emits the `EmptyFunc` test cases for arities 1 through 15.
pub fn write_func_tests<W: Write>(out: W, literals: &mut dyn LiteralSource) -> anyhow::Result<()> {
    write_stub_cases(out, FUNC_CASE, literals)
}
