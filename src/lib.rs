//! # overloadgen
//!
//! **overloadgen** expands parametrized templates into concrete overload sets for the
//! Maxisoft.Utils C# library, so that families of near-identical code units (one per
//! arity, or one per numeric type) never have to be written by hand.
//!
//! ## Overview
//!
//! Three independent generators share one pipeline shape:
//!
//! ```text
//! ParameterDomain → TemplateRenderer → Emitter
//! ```
//!
//! - the **parameter domain** enumerates a finite, ordered set of tuples (arities
//!   `1..=15`, or a fixed list of numeric type names),
//! - the **renderer** substitutes each tuple into an immutable template and returns
//!   one rendered unit of C# source text,
//! - the **emitter** writes the units to the output stream in domain order, separated
//!   by blank lines.
//!
//! The two delegate-stub generators additionally synthesize literal argument values
//! for each generated test case; see [`literals`].
//!
//! Each generation pass is sequential, single-threaded, and stateless: a run either
//! emits its full domain or fails partway with the error on stderr. The produced
//! text is the process's entire stdout, ready to be redirected into a source file
//! by the consuming build step.
//!
//! ## Modules
//!
//! - **[`generator`]** - templates, rendering, emission, and the three generator passes
//! - **[`literals`]** - synthesized hexadecimal argument literals for generated test cases
//! - **[`cli`]** - the `overloadgen` command-line surface
//!
//! ## Usage
//!
//! ```bash
//! overloadgen empty-action-tests > EmptyActionTest.Generated.cs
//! overloadgen empty-func-tests   > EmptyFuncTest.Generated.cs
//! overloadgen clamp-overloads    > Numbers.Clamp.Generated.cs
//! ```

pub mod cli;
pub mod generator;
pub mod literals;

pub use generator::{write_action_tests, write_clamp_overloads, write_func_tests};
pub use literals::{FixedLiterals, LiteralSource, RandomLiterals};
