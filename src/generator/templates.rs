//! Templates and the pure rendering step.
//!
//! Each generator family owns one immutable template with named placeholders.
//! Rendering is a pure function of (template, bindings): the bindings are a
//! typed struct serialized into the template context, never positional string
//! interpolation, so tests can assert exact placeholder-to-value pairs without
//! depending on template layout.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

/// One `[Fact]` test case instantiating and invoking an n-ary `EmptyAction`.
///
/// The trailing space after `()` in the method header is part of the emitted
/// bytes; downstream generated files already carry it.
pub const ACTION_CASE: &str = r#"[Fact]
public void Test_Action{{ n }}() 
{
    Action<{{ types }}> f = new EmptyAction<{{ types }}>();
    f({{ args }});
}"#;

/// One `[Fact]` test case asserting an n-ary `EmptyFunc` returns the default value.
pub const FUNC_CASE: &str = r#"[Fact]
public void Test_Func{{ n }}() 
{
    Func<{{ types }}, object> f = new EmptyFunc<{{ types }}, object>();
    Assert.Equal(default(object), f({{ args }}));
}"#;

/// Branch-based clamp overload for the integer-like numeric types.
///
/// `min <= max` is a diagnostic-only precondition of the *generated* code;
/// the generator never evaluates it.
pub const CLAMP_BRANCH: &str = r#"[MethodImpl(MethodImplOptions.AggressiveInlining)]
public static {{ type }} Clamp(this {{ type }} x, {{ type }} min, {{ type }} max)
{
    Debug.Assert(min <= max);
    return x < min ? min : max < x ? max : x;
}"#;

/// Min/max-composition clamp overload for the fractional numeric types.
///
/// Carries no precondition assertion, mirroring the shipped overloads.
pub const CLAMP_MIN_MAX: &str = r#"[MethodImpl(MethodImplOptions.AggressiveInlining)]
public static {{ type }} Clamp(this {{ type }} x, {{ type }} min, {{ type }} max)
{
    return Math.Max(min, Math.Min(x, max));
}"#;

/// Placeholder bindings for one delegate-stub test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubBindings {
    /// Arity; also the method name suffix.
    pub n: usize,
    /// `n` repetitions of the representative type token, joined by `", "`.
    pub types: String,
    /// `n` synthesized hexadecimal literals, joined by `", "`.
    pub args: String,
}

/// Placeholder bindings for one clamp overload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClampBindings<'a> {
    pub r#type: &'a str,
}

/// Renders one unit from a template and its bindings.
///
/// Undefined variables are a hard render error, so no placeholder can survive
/// unresolved into the emitted text. The template is registered under a
/// non-HTML name to keep auto-escaping off; the output is C# source and
/// `<`/`>` must pass through verbatim.
pub fn render_unit<S: Serialize>(template: &str, bindings: &S) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template("unit.cs", template)?;
    let tmpl = env.get_template("unit.cs")?;
    tmpl.render(bindings)
}
