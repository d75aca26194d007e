//! # Generator Module
//!
//! The generator module holds the three generation passes and their shared
//! machinery. Every pass has the same shape:
//!
//! ```text
//! ParameterDomain → TemplateRenderer → Emitter
//! ```
//!
//! 1. **Parameter domain** - an ordered, finite sequence of tuples: the arity
//!    range `1..=15` ([`stubs::MAX_ARITY`]) or the static numeric type table
//!    ([`clamp::NUMERIC_TYPES`])
//! 2. **Template rendering** - [`templates::render_unit`] substitutes one
//!    tuple's bindings into the family's template; undefined placeholders are
//!    render errors
//! 3. **Emission** - [`emit::Emitter`] writes each unit to the output stream in
//!    domain order, separated by blank lines
//!
//! The passes are independent and commutative: each writes its own complete
//! stream and shares no state with the others.

mod clamp;
mod emit;
mod stubs;
mod templates;


pub use clamp::{strategy_for, write_clamp_overloads, ClampStrategy, NumericType, NUMERIC_TYPES};
pub use emit::Emitter;
pub use stubs::{arity_domain, write_action_tests, write_func_tests, MAX_ARITY};
pub use templates::{
    render_unit, ClampBindings, StubBindings, ACTION_CASE, CLAMP_BRANCH, CLAMP_MIN_MAX, FUNC_CASE,
};
